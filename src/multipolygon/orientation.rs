/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Controls how the multipolygon builder reconciles ring winding direction
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationHandling {
    /// Force the first ring to be an outer contour and every subsequent ring to be a hole of it,
    /// reversing rings as needed. This is the default: it lets a caller author rings in whatever
    /// direction is convenient and still get correct non-zero/odd-even fills.
    FirstRingIsContourFollowedByHoles,

    /// Leave ring winding exactly as authored
    KeepOriginal,
}

impl Default for OrientationHandling {
    fn default() -> OrientationHandling {
        OrientationHandling::FirstRingIsContourFollowedByHoles
    }
}
