/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Multipolygon
//!
//! Groups a path's flattened, closed figures into oriented rings: the outer contour followed by
//! its holes (or whatever winding the caller authored, under `OrientationHandling::KeepOriginal`).
//!

mod build;
mod orientation;
mod ring;

pub use build::*;
pub use orientation::*;
pub use ring::*;
