/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error;
use std::fmt;

///
/// Everything that can go wrong constructing or driving a `PolygonScanner`
///
/// `DegenerateInput` cases from the design (empty rings, fully-horizontal rings, paths that
/// compile down to zero edges) are not represented here: those are recoverable and are handled
/// by producing a scanner that reports no crossings rather than by returning an error.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ScanError {
    /// The path was null/empty in a way the caller should not have sent (use an empty `Path` instead,
    /// which is a valid, not an invalid, input), or a segment endpoint contained NaN or infinity.
    InvalidInput(String),

    /// `subsampling < 1`, or `min_y >= max_y`.
    InvalidRange {
        min_y: i32,
        max_y: i32,
        subsampling: i32,
    },

    /// The allocator could not provide the scratch buffers the scanner needs.
    Allocation(String),

    /// The drive API (`move_to_next_pixel_line` / `move_to_next_subpixel_scan_line` / `scan_current_line`)
    /// was called out of order.
    Precondition(&'static str),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidInput(reason) => write!(f, "invalid path input: {}", reason),
            ScanError::InvalidRange {
                min_y,
                max_y,
                subsampling,
            } => write!(
                f,
                "invalid scan range (min_y={}, max_y={}, subsampling={})",
                min_y, max_y, subsampling
            ),
            ScanError::Allocation(reason) => write!(f, "scratch allocation failed: {}", reason),
            ScanError::Precondition(reason) => write!(f, "precondition violated: {}", reason),
        }
    }
}

impl error::Error for ScanError {}

pub type ScanResult<T> = Result<T, ScanError>;
