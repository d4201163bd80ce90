/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geometry::{Point, Transform};

/// Maximum permitted chord deviation from a curve during flattening, in path units.
pub const FLATNESS_EPSILON: f32 = 0.25;

/// Recursion depth cap for cubic subdivision: far beyond what `FLATNESS_EPSILON` ever needs,
/// it exists only to stop a degenerate (NaN-producing) control polygon from recursing forever.
const MAX_SUBDIVISION_DEPTH: u32 = 24;

///
/// One segment of a `Figure`
///
/// A segment never carries its own closing flag: whether the path loops back to its start is a
/// property of the containing `Figure`, not of any one segment within it.
///
#[derive(Clone, Debug, PartialEq)]
pub enum LineSegment {
    /// A polyline through an ordered sequence of points (length >= 2)
    Linear(Vec<Point>),

    /// A cubic Bezier curve. Quadratic curves are raised to this form at the point they are
    /// added to a path (see `PathBuilder::add_quadratic_bezier`), so this is the only curved
    /// representation the flattener needs to know about besides the elliptical arc.
    CubicBezier {
        p0: Point,
        c1: Point,
        c2: Point,
        p3: Point,
    },

    /// An elliptical arc in center parameterization, plus the transform in effect when it was added
    EllipticalArc {
        center: Point,
        radii: (f32, f32),
        rotation_deg: f32,
        start_deg: f32,
        sweep_deg: f32,
        transform: Transform,
    },
}

impl LineSegment {
    ///
    /// The first point of this segment, before flattening
    ///
    pub fn start_point(&self) -> Point {
        match self {
            LineSegment::Linear(points) => points[0],
            LineSegment::CubicBezier { p0, .. } => *p0,
            LineSegment::EllipticalArc { .. } => self.flatten()[0],
        }
    }

    ///
    /// The last point of this segment, before flattening
    ///
    pub fn end_point(&self) -> Point {
        match self {
            LineSegment::Linear(points) => *points.last().unwrap(),
            LineSegment::CubicBezier { p3, .. } => *p3,
            LineSegment::EllipticalArc { .. } => {
                let flattened = self.flatten();
                *flattened.last().unwrap()
            }
        }
    }

    ///
    /// Returns true if every control point and endpoint of this segment is finite
    ///
    pub fn is_finite(&self) -> bool {
        match self {
            LineSegment::Linear(points) => points.iter().all(Point::is_finite),
            LineSegment::CubicBezier { p0, c1, c2, p3 } => {
                p0.is_finite() && c1.is_finite() && c2.is_finite() && p3.is_finite()
            }
            LineSegment::EllipticalArc {
                center,
                radii,
                rotation_deg,
                start_deg,
                sweep_deg,
                ..
            } => {
                center.is_finite()
                    && radii.0.is_finite()
                    && radii.1.is_finite()
                    && rotation_deg.is_finite()
                    && start_deg.is_finite()
                    && sweep_deg.is_finite()
            }
        }
    }

    ///
    /// Flattens this segment into a polyline. The returned points include both the start and the
    /// end of the segment exactly, with no accumulated drift at either join.
    ///
    pub fn flatten(&self) -> Vec<Point> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    ///
    /// Appends this segment's flattened polyline to `out`
    ///
    pub fn flatten_into(&self, out: &mut Vec<Point>) {
        match self {
            LineSegment::Linear(points) => out.extend_from_slice(points),

            LineSegment::CubicBezier { p0, c1, c2, p3 } => {
                out.push(*p0);
                subdivide_cubic(*p0, *c1, *c2, *p3, FLATNESS_EPSILON, MAX_SUBDIVISION_DEPTH, out);
            }

            LineSegment::EllipticalArc {
                center,
                radii,
                rotation_deg,
                start_deg,
                sweep_deg,
                transform,
            } => flatten_elliptical_arc(*center, *radii, *rotation_deg, *start_deg, *sweep_deg, transform, out),
        }
    }
}

///
/// Raises a quadratic Bezier (p0, c, p3) to the equivalent cubic form
///
pub fn quadratic_to_cubic(p0: Point, c: Point, p3: Point) -> LineSegment {
    let c1 = Point::new(p0.x + (2.0 / 3.0) * (c.x - p0.x), p0.y + (2.0 / 3.0) * (c.y - p0.y));
    let c2 = Point::new(p3.x + (2.0 / 3.0) * (c.x - p3.x), p3.y + (2.0 / 3.0) * (c.y - p3.y));

    LineSegment::CubicBezier { p0, c1, c2, p3 }
}

///
/// True if the control polygon of (p0,c1,c2,p3) is within `eps` of its chord, using the same
/// one-third/two-third point test the design specifies
///
fn is_flat_enough(p0: Point, c1: Point, c2: Point, p3: Point, eps: f32) -> bool {
    let third = p0.lerp(p3, 1.0 / 3.0);
    let two_third = p0.lerp(p3, 2.0 / 3.0);

    c1.distance_to(third).max(c2.distance_to(two_third)) < eps
}

///
/// Recursively subdivides (p0,c1,c2,p3) by De Casteljau midpoint splitting, appending every point
/// after `p0` (which the caller has already emitted) to `out`
///
fn subdivide_cubic(p0: Point, c1: Point, c2: Point, p3: Point, eps: f32, depth_remaining: u32, out: &mut Vec<Point>) {
    if depth_remaining == 0 || is_flat_enough(p0, c1, c2, p3, eps) {
        out.push(p3);
        return;
    }

    let p01 = p0.lerp(c1, 0.5);
    let p12 = c1.lerp(c2, 0.5);
    let p23 = c2.lerp(p3, 0.5);
    let p012 = p01.lerp(p12, 0.5);
    let p123 = p12.lerp(p23, 0.5);
    let p0123 = p012.lerp(p123, 0.5);

    subdivide_cubic(p0, p01, p012, p0123, eps, depth_remaining - 1, out);
    subdivide_cubic(p0123, p123, p23, p3, eps, depth_remaining - 1, out);
}

///
/// Flattens an elliptical arc by stepping through theta with a step size chosen so the chord
/// error stays under `FLATNESS_EPSILON` for the larger of the two radii
///
fn flatten_elliptical_arc(
    center: Point,
    radii: (f32, f32),
    rotation_deg: f32,
    start_deg: f32,
    sweep_deg: f32,
    transform: &Transform,
    out: &mut Vec<Point>,
) {
    let (rx, ry) = radii;
    let r_max = rx.abs().max(ry.abs());

    let theta_step_rad = if r_max > FLATNESS_EPSILON {
        2.0 * (1.0 - FLATNESS_EPSILON / r_max).acos()
    } else {
        std::f32::consts::PI
    };
    let theta_step_deg = theta_step_rad.to_degrees().max(1e-3);

    let step_count = ((sweep_deg.abs() / theta_step_deg).ceil() as usize).max(1);

    let (rot_sin, rot_cos) = rotation_deg.to_radians().sin_cos();

    for i in 0..=step_count {
        let t = start_deg + sweep_deg * (i as f32 / step_count as f32);
        let theta = t.to_radians();

        let ex = rx * theta.cos();
        let ey = ry * theta.sin();

        let x = center.x + ex * rot_cos - ey * rot_sin;
        let y = center.y + ex * rot_sin + ey * rot_cos;

        out.push(transform.transform_point(Point::new(x, y)));
    }
}
