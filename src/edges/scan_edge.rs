/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Tags an emitted crossing so the non-zero fill rule can tell a genuine boundary touch from the
/// duplicate artifact produced when two consecutive edges meet exactly on a subpixel scan line.
///
/// `Corner` marks one half of a piercing-vertex duplicate pair (see `ScanEdge::emit0`/`emit1`):
/// two crossings at the same x that represent a single physical boundary crossing and must
/// collapse back to one winding step. `Up`/`Down` mark an ordinary crossing (or one half of a
/// touching-vertex pair) by the sign of its winding contribution.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonZeroIntersectionType {
    Corner,
    Up,
    Down,
}

/// Which endpoint of a `ScanEdge` a ring vertex landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Zero,
    One,
}

///
/// A single non-horizontal, monotonic-in-y edge compiled from a multipolygon ring
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanEdge {
    y0: f32,
    y1: f32,
    x0: f32,
    x1: f32,
    slope_inv: f32,

    /// True iff, in ring order, this edge goes from y1 up to y0 (winding contribution -1)
    edge_up: bool,

    /// Number of crossings to emit when the sweep line passes exactly through y0 / y1
    emit0: u8,
    emit1: u8,

    /// The `NonZeroIntersectionType` to tag an emitted crossing with at y0 / y1
    type0: NonZeroIntersectionType,
    type1: NonZeroIntersectionType,
}

impl ScanEdge {
    pub(crate) fn new(y0: f32, y1: f32, x0: f32, x1: f32, edge_up: bool) -> ScanEdge {
        debug_assert!(y0 < y1);

        let slope_inv = (x1 - x0) / (y1 - y0);
        let generic_type = if edge_up { NonZeroIntersectionType::Down } else { NonZeroIntersectionType::Up };

        ScanEdge {
            y0,
            y1,
            x0,
            x1,
            slope_inv,
            edge_up,
            emit0: 1,
            emit1: 1,
            type0: generic_type,
            type1: generic_type,
        }
    }

    #[inline]
    pub fn y0(&self) -> f32 {
        self.y0
    }

    #[inline]
    pub fn y1(&self) -> f32 {
        self.y1
    }

    #[inline]
    pub fn x0(&self) -> f32 {
        self.x0
    }

    #[inline]
    pub fn x1(&self) -> f32 {
        self.x1
    }

    #[inline]
    pub fn edge_up(&self) -> bool {
        self.edge_up
    }

    ///
    /// This edge's winding contribution under the non-zero rule: -1 if `edge_up`, +1 otherwise
    ///
    #[inline]
    pub fn winding_contribution(&self) -> i32 {
        if self.edge_up {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn emit(&self, endpoint: Endpoint) -> u8 {
        match endpoint {
            Endpoint::Zero => self.emit0,
            Endpoint::One => self.emit1,
        }
    }

    #[inline]
    pub fn intersection_type(&self, endpoint: Endpoint) -> NonZeroIntersectionType {
        match endpoint {
            Endpoint::Zero => self.type0,
            Endpoint::One => self.type1,
        }
    }

    pub(crate) fn set_emit(&mut self, endpoint: Endpoint, count: u8) {
        match endpoint {
            Endpoint::Zero => self.emit0 = count,
            Endpoint::One => self.emit1 = count,
        }
    }

    pub(crate) fn set_intersection_type(&mut self, endpoint: Endpoint, kind: NonZeroIntersectionType) {
        match endpoint {
            Endpoint::Zero => self.type0 = kind,
            Endpoint::One => self.type1 = kind,
        }
    }

    ///
    /// The x coordinate of this edge at `y`, for `y` strictly between `y0` and `y1`. At the
    /// endpoints themselves, use `x0()`/`x1()` directly (see `emit0`/`emit1`) rather than this,
    /// since they are guaranteed exactly equal to the originating vertex's x even when the
    /// slope-based formula would round differently.
    ///
    #[inline]
    pub fn x_at(&self, y: f32) -> f32 {
        self.x0 + self.slope_inv * (y - self.y0)
    }
}

///
/// A compiled, flattened collection of scan edges plus the two index permutations the scanner
/// sweeps through (`sorted_by_y0` to find edges to enter, `sorted_by_y1` to find edges to leave)
///
#[derive(Clone, Debug, Default)]
pub struct ScanEdgeCollection {
    edges: Vec<ScanEdge>,
    sorted_by_y0: Vec<u32>,
    sorted_by_y1: Vec<u32>,
}

impl ScanEdgeCollection {
    pub(crate) fn new(edges: Vec<ScanEdge>) -> ScanEdgeCollection {
        let mut sorted_by_y0: Vec<u32> = (0..edges.len() as u32).collect();
        let mut sorted_by_y1 = sorted_by_y0.clone();

        sorted_by_y0.sort_by(|&a, &b| edges[a as usize].y0.partial_cmp(&edges[b as usize].y0).unwrap());
        sorted_by_y1.sort_by(|&a, &b| edges[a as usize].y1.partial_cmp(&edges[b as usize].y1).unwrap());

        ScanEdgeCollection {
            edges,
            sorted_by_y0,
            sorted_by_y1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edges(&self) -> &[ScanEdge] {
        &self.edges
    }

    #[inline]
    pub fn sorted_by_y0(&self) -> &[u32] {
        &self.sorted_by_y0
    }

    #[inline]
    pub fn sorted_by_y1(&self) -> &[u32] {
        &self.sorted_by_y1
    }

    ///
    /// The minimum y0 across all edges, i.e. the y the sweep can safely start pre-warming from
    ///
    pub fn min_y0(&self) -> Option<f32> {
        self.sorted_by_y0.first().map(|&idx| self.edges[idx as usize].y0)
    }
}
