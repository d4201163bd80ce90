/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::active_edge_list::{ActiveEdgeList, RawCrossingScratch};
use super::fill_rule::FillRule;
use crate::alloc::{ScratchAllocator, VecScratchAllocator};
use crate::edges::{self, ScanEdgeCollection};
use crate::error::{ScanError, ScanResult};
use crate::multipolygon::{OrientationHandling, TessellatedMultipolygon};
use crate::path::IPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DriveState {
    /// Ready to start (or re-start) a pixel row
    BetweenPixelLines,
    /// `move_to_next_pixel_line` has run; waiting for the first subpixel advance of this row
    AtPixelLine,
    /// A subpixel line has been advanced to; `scan_current_line` may be called
    AtSubpixelLine,
}

///
/// Sweeps a tessellated path's compiled edges one subpixel scan line at a time, producing the x
/// crossings of the path's boundary under a chosen fill rule.
///
/// Drive the scanner with, in this order, repeated calls to `move_to_next_pixel_line`, then for
/// each pixel row one or more calls to `move_to_next_subpixel_scan_line` followed by
/// `scan_current_line`. Calling out of order is a usage bug (see `ScanError::Precondition`);
/// debug builds assert it, release builds degrade gracefully by returning whatever the
/// out-of-order state happens to produce rather than corrupting memory.
///
/// Both `min_y` and `max_y` are inclusive: `create(path, 0, 10, ...)` visits pixel rows `0..=10`,
/// the last of them standing for the single boundary sample at `y = max_y` rather than a full row
/// of `subsampling` lines (there is no row beyond `max_y` to subsample into). A scanner created
/// with `min_y=2, max_y=11, subsampling=1` therefore yields 10 subpixel lines in total, one per
/// integer `y` from 2 through 11.
///
pub struct PolygonScanner {
    edges: ScanEdgeCollection,
    active: ActiveEdgeList,
    rule: FillRule,
    subsampling: u32,
    subpixel_fraction: f32,

    min_y: i32,
    max_y: i32,
    pixel_y: i32,
    sub_y: f32,
    row_limit: u32,
    subline_index: u32,

    idx0: usize,
    idx1: usize,

    state: DriveState,

    raw_scratch: RawCrossingScratch,
    crossing_buffer: Vec<f32>,
}

impl PolygonScanner {
    ///
    /// Builds a scanner over `path` using the default `VecScratchAllocator`. See
    /// `create_with_allocator` to supply your own.
    ///
    pub fn create(
        path: &dyn IPath,
        min_y: i32,
        max_y: i32,
        subsampling: i32,
        rule: FillRule,
        orientation: OrientationHandling,
    ) -> ScanResult<PolygonScanner> {
        PolygonScanner::create_with_allocator(path, min_y, max_y, subsampling, rule, orientation, &VecScratchAllocator)
    }

    pub fn create_with_allocator(
        path: &dyn IPath,
        min_y: i32,
        max_y: i32,
        subsampling: i32,
        rule: FillRule,
        orientation: OrientationHandling,
        allocator: &dyn ScratchAllocator,
    ) -> ScanResult<PolygonScanner> {
        if subsampling < 1 || min_y >= max_y {
            return Err(ScanError::InvalidRange {
                min_y,
                max_y,
                subsampling,
            });
        }

        for figure in path.figures() {
            if !figure.is_finite() {
                return Err(ScanError::InvalidInput("a segment endpoint was NaN or infinite".to_string()));
            }
        }

        let multipolygon = TessellatedMultipolygon::build(path, orientation);
        let edge_collection = edges::compile(&multipolygon, subsampling as u32);

        let max_intersections = edge_collection.len() * 2;
        let k = if rule == FillRule::Nonzero { 2 } else { 1 };
        let crossing_buffer = allocator.allocate_f32(max_intersections * k).into_vec();

        let mut scanner = PolygonScanner {
            edges: edge_collection,
            active: ActiveEdgeList::new(),
            rule,
            subsampling: subsampling as u32,
            subpixel_fraction: 1.0 / subsampling as f32,
            min_y,
            max_y,
            pixel_y: min_y - 1,
            sub_y: 0.0,
            row_limit: subsampling as u32,
            subline_index: 0,
            idx0: 0,
            idx1: 0,
            state: DriveState::BetweenPixelLines,
            raw_scratch: RawCrossingScratch::new(),
            crossing_buffer,
        };
        scanner.crossing_buffer.clear();

        scanner.prewarm();

        Ok(scanner)
    }

    /// Enters and leaves every edge below `min_y` without producing output, so the active list is
    /// already correct by the time the caller starts driving real scan lines.
    fn prewarm(&mut self) {
        if self.edges.is_empty() {
            return;
        }

        self.sub_y = self.edges.edges()[self.edges.sorted_by_y0()[0] as usize].y0();

        while self.sub_y < self.min_y as f32 {
            let next_y0 = self.next_y0();
            let next_y1 = self.next_y1();

            let next = match (next_y0, next_y1) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => break,
            };

            self.sub_y = next;
            self.enter_edges(self.sub_y);
            self.leave_edges(self.sub_y);
            self.active.compact();
        }
    }

    fn next_y0(&self) -> Option<f32> {
        self.edges.sorted_by_y0().get(self.idx0).map(|&i| self.edges.edges()[i as usize].y0())
    }

    fn next_y1(&self) -> Option<f32> {
        self.edges.sorted_by_y1().get(self.idx1).map(|&i| self.edges.edges()[i as usize].y1())
    }

    fn enter_edges(&mut self, y: f32) {
        let sorted = self.edges.sorted_by_y0();
        while self.idx0 < sorted.len() && self.edges.edges()[sorted[self.idx0] as usize].y0() <= y {
            self.active.enter(sorted[self.idx0]);
            self.idx0 += 1;
        }
    }

    fn leave_edges(&mut self, y: f32) {
        let sorted = self.edges.sorted_by_y1();
        while self.idx1 < sorted.len() && self.edges.edges()[sorted[self.idx1] as usize].y1() <= y {
            self.active.leave_mark(sorted[self.idx1]);
            self.idx1 += 1;
        }
    }

    ///
    /// Advances to the next pixel row. `max_y` is inclusive, so a scanner created with
    /// `min_y=0, max_y=10` visits the 11 pixel rows `0..=10`; the last of them is the single
    /// boundary sample at `y = max_y` rather than a full subsampled row. Returns `false` once the
    /// scanner has swept past the requested range.
    ///
    pub fn move_to_next_pixel_line(&mut self) -> bool {
        debug_assert!(
            self.state == DriveState::BetweenPixelLines || self.state == DriveState::AtSubpixelLine,
            "move_to_next_pixel_line called out of order"
        );

        self.pixel_y += 1;
        self.sub_y = self.pixel_y as f32 - self.subpixel_fraction;
        self.row_limit = if self.pixel_y < self.max_y { self.subsampling } else { 1 };
        self.subline_index = 0;
        self.state = DriveState::AtPixelLine;

        self.pixel_y <= self.max_y
    }

    ///
    /// Advances to the next subpixel scan line within the current pixel row. Returns `false` once
    /// the row's subpixel lines are exhausted (the final row, at `y = max_y`, has exactly one).
    ///
    pub fn move_to_next_subpixel_scan_line(&mut self) -> bool {
        debug_assert!(
            self.state == DriveState::AtPixelLine || self.state == DriveState::AtSubpixelLine,
            "move_to_next_subpixel_scan_line called out of order"
        );

        self.active.compact();

        self.sub_y += self.subpixel_fraction;
        self.enter_edges(self.sub_y);
        self.leave_edges(self.sub_y);

        self.subline_index += 1;
        self.state = DriveState::AtSubpixelLine;

        self.subline_index <= self.row_limit
    }

    ///
    /// The sorted x crossings of the current subpixel scan line. Always even length under
    /// well-formed input.
    ///
    pub fn scan_current_line(&mut self) -> &[f32] {
        debug_assert!(self.state == DriveState::AtSubpixelLine, "scan_current_line called out of order");

        self.active.compute_crossings(self.sub_y, self.edges.edges(), self.rule, &mut self.raw_scratch, &mut self.crossing_buffer);

        &self.crossing_buffer
    }

    #[inline]
    pub fn pixel_line_y(&self) -> i32 {
        self.pixel_y
    }

    #[inline]
    pub fn sub_pixel_y(&self) -> f32 {
        self.sub_y
    }

    #[inline]
    pub fn subpixel_fraction(&self) -> f32 {
        self.subpixel_fraction
    }

    #[inline]
    pub fn subsampling(&self) -> u32 {
        self.subsampling
    }

    /// Releases the scanner's scratch buffers and compiled edges. Calling this is optional: an
    /// ordinary drop has the same effect, since every resource here is plain owned Rust memory.
    pub fn dispose(self) {}
}
