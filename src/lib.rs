/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Scanline intersection engine for filling 2D vector paths: flattens a path's curves into
//! polylines, tessellates its closed figures into oriented rings, compiles those rings into
//! monotonic edges, and sweeps a subpixel scan line across them to produce the x crossings a
//! brush or rasterizer needs to fill each pixel row.
//!

/// Scratch buffer allocation: the `ScratchAllocator` trait and its default `Vec`-backed impl
pub mod alloc;

/// Non-horizontal, monotonic-in-y edges compiled from a multipolygon, and the compiler itself
pub mod edges;

/// Error and result types for constructing and driving a scanner
pub mod error;

/// Points and affine transforms
pub mod geometry;

/// Groups a path's closed figures into oriented rings (the outer contour and its holes)
pub mod multipolygon;

/// An immediate-mode path builder, plus the flattened segment and figure types it produces
pub mod path;

/// The active edge list, fill rule classifier, and `PolygonScanner` that sweep compiled edges
pub mod scanplan;

#[cfg(feature = "multithreading")]
pub mod parallel;

pub use alloc::{OwnedBuffer, ScratchAllocator, VecScratchAllocator};
pub use error::{ScanError, ScanResult};
pub use geometry::{Point, Transform};
pub use multipolygon::{OrientationHandling, Ring, TessellatedMultipolygon};
pub use path::{Figure, IPath, LineSegment, Path, PathBuilder};
pub use scanplan::{ActiveEdgeList, FillRule, PolygonScanner};

#[cfg(feature = "multithreading")]
pub use parallel::scan_paths_parallel;
