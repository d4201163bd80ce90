/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::point::Point;

///
/// A 3x2 affine transform, stored row-major as `[[a, b, c], [d, e, f]]`
///
/// Applied to a point as:
///
/// ```text
/// x' = a*x + b*y + c
/// y' = d*x + e*y + f
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: [[f32; 3]; 2],
}

impl Transform {
    #[inline]
    pub fn identity() -> Transform {
        Transform {
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        }
    }

    #[inline]
    pub fn translate(dx: f32, dy: f32) -> Transform {
        Transform {
            matrix: [[1.0, 0.0, dx], [0.0, 1.0, dy]],
        }
    }

    #[inline]
    pub fn scale(sx: f32, sy: f32) -> Transform {
        Transform {
            matrix: [[sx, 0.0, 0.0], [0.0, sy, 0.0]],
        }
    }

    ///
    /// Replaces just the translation component of this transform, leaving rotation/scale alone
    ///
    #[inline]
    pub fn with_translation(mut self, dx: f32, dy: f32) -> Transform {
        self.matrix[0][2] = dx;
        self.matrix[1][2] = dy;
        self
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        let m = &self.matrix;
        Point::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2],
        )
    }

    ///
    /// Combines two transforms so that `self.then(next)` applies `self` first, then `next`
    ///
    pub fn then(&self, next: &Transform) -> Transform {
        let a = &self.matrix;
        let b = &next.matrix;

        let mut result = [[0.0; 3]; 2];
        for row in 0..2 {
            result[row][0] = b[row][0] * a[0][0] + b[row][1] * a[1][0];
            result[row][1] = b[row][0] * a[0][1] + b[row][1] * a[1][1];
            result[row][2] = b[row][0] * a[0][2] + b[row][1] * a[1][2] + b[row][2];
        }

        Transform { matrix: result }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Transform::identity()
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Transform {
        Transform::identity()
    }
}
