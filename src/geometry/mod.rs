/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Shared point/transform primitives that every later stage of the scanline engine builds on
//!

mod point;
mod transform;

pub use point::*;
pub use transform::*;
