/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::orientation::OrientationHandling;
use super::ring::Ring;
use crate::geometry::Point;
use crate::path::IPath;

///
/// An ordered sequence of rings: ring 0 is the outer contour, rings 1..N are its holes (unless
/// built with `OrientationHandling::KeepOriginal`)
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TessellatedMultipolygon {
    rings: Vec<Ring>,
}

impl TessellatedMultipolygon {
    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn total_vertex_count(&self) -> usize {
        self.rings.iter().map(|ring| ring.points().len()).sum()
    }

    ///
    /// Flattens every closed figure of `path` into a ring, drops degenerate rings, and applies
    /// `orientation`. Open figures are ignored: they have no fill interior for this scanner.
    ///
    pub fn build(path: &dyn IPath, orientation: OrientationHandling) -> TessellatedMultipolygon {
        let mut rings: Vec<Ring> = path
            .figures()
            .iter()
            .filter(|figure| figure.is_closed())
            .map(|figure| Ring::new(drop_consecutive_duplicates(figure.flatten())))
            .filter(|ring| !ring.is_degenerate())
            .collect();

        if orientation == OrientationHandling::FirstRingIsContourFollowedByHoles {
            if let Some(outer) = rings.first_mut() {
                if !outer.is_outer() {
                    outer.reverse();
                }
            }

            for hole in rings.iter_mut().skip(1) {
                if hole.is_outer() {
                    hole.reverse();
                }
            }
        }

        TessellatedMultipolygon { rings }
    }
}

fn drop_consecutive_duplicates(points: Vec<Point>) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if out.last().map_or(true, |&last: &Point| last.x != point.x || last.y != point.y) {
            out.push(point);
        }
    }
    out
}
