/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Path
//!
//! A path is a set of figures, each an ordered list of line/curve segments. This module owns the
//! data model (`Figure`, `LineSegment`, `Path`) and a minimal builder (`PathBuilder`) implementing
//! the external path-authoring surface well enough to exercise the rest of the crate without a
//! separate DSL dependency.
//!

mod builder;
mod figure;
mod path;
mod segment;

pub use builder::*;
pub use figure::*;
pub use path::*;
pub use segment::*;
