/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use super::fill_rule::{classify_crossings, FillRule};
use crate::edges::{Endpoint, NonZeroIntersectionType, ScanEdge};

/// Most polygons only have a handful of edges straddling any one scan line, so the active list
/// and its scratch buffers stay on the stack until a scan line is unusually busy.
const INLINE_CAPACITY: usize = 8;

/// One raw, unfiltered crossing produced by an active edge before fill-rule classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawCrossing {
    pub x: f32,
    pub contribution: i32,
    pub kind: NonZeroIntersectionType,
}

/// Reusable scratch space for a single `compute_crossings` call
pub type RawCrossingScratch = SmallVec<[RawCrossing; INLINE_CAPACITY * 2]>;

///
/// The set of edges straddling the current sweep line, indexed by edge index into a
/// `ScanEdgeCollection`. `O(k)` iteration over `k` active edges, amortized `O(1)` enter,
/// `O(k)` leave and compact.
///
#[derive(Clone, Debug, Default)]
pub struct ActiveEdgeList {
    active: SmallVec<[u32; INLINE_CAPACITY]>,
    leaving: SmallVec<[bool; INLINE_CAPACITY]>,
}

impl ActiveEdgeList {
    pub fn new() -> ActiveEdgeList {
        ActiveEdgeList::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn enter(&mut self, edge_index: u32) {
        self.active.push(edge_index);
        self.leaving.push(false);
    }

    ///
    /// Marks `edge_index` as leaving. The entry stays in the active list (and so still
    /// contributes to `compute_crossings`) until the next `compact`.
    ///
    pub fn leave_mark(&mut self, edge_index: u32) {
        if let Some(pos) = self.active.iter().position(|&e| e == edge_index) {
            self.leaving[pos] = true;
        }
    }

    ///
    /// Removes every entry marked as leaving, preserving the relative order of the rest
    ///
    pub fn compact(&mut self) {
        let mut write = 0;
        for read in 0..self.active.len() {
            if !self.leaving[read] {
                self.active[write] = self.active[read];
                self.leaving[write] = false;
                write += 1;
            }
        }
        self.active.truncate(write);
        self.leaving.truncate(write);
    }

    ///
    /// Computes the sorted, fill-rule-filtered x crossings of the active edges at `y`, appending
    /// them to `out` (which is cleared first). `raw_scratch` is cleared and reused as working
    /// space so a scanner can call this once per subpixel line without allocating.
    ///
    pub fn compute_crossings(
        &self,
        y: f32,
        edges: &[ScanEdge],
        rule: FillRule,
        raw_scratch: &mut RawCrossingScratch,
        out: &mut Vec<f32>,
    ) {
        let raw = raw_scratch;
        raw.clear();

        for &idx in &self.active {
            let edge = &edges[idx as usize];

            if y == edge.y0() {
                let emit = edge.emit(Endpoint::Zero);
                let kind = edge.intersection_type(Endpoint::Zero);
                for _ in 0..emit {
                    raw.push(RawCrossing { x: edge.x0(), contribution: edge.winding_contribution(), kind });
                }
            } else if y == edge.y1() {
                let emit = edge.emit(Endpoint::One);
                let kind = edge.intersection_type(Endpoint::One);
                for _ in 0..emit {
                    raw.push(RawCrossing { x: edge.x1(), contribution: edge.winding_contribution(), kind });
                }
            } else {
                let kind = if edge.edge_up() { NonZeroIntersectionType::Down } else { NonZeroIntersectionType::Up };
                raw.push(RawCrossing { x: edge.x_at(y), contribution: edge.winding_contribution(), kind });
            }
        }

        raw.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());

        classify_crossings(rule, raw, out);
    }
}
