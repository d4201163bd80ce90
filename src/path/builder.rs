/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::figure::Figure;
use super::path::Path;
use super::segment::{quadratic_to_cubic, LineSegment};
use crate::geometry::{Point, Transform};

///
/// Converts an SVG-style endpoint arc parameterization into the center parameterization this
/// crate's `LineSegment::EllipticalArc` stores. Follows the standard construction (SVG 1.1
/// appendix F.6.5), working in the arc's own (unrotated, untransformed) coordinate space.
///
fn endpoint_to_center_arc(
    from: Point,
    rx: f32,
    ry: f32,
    rotation_deg: f32,
    large_arc: bool,
    sweep: bool,
    to: Point,
) -> (Point, f32, f32, f32, f32) {
    let (mut rx, mut ry) = (rx.abs(), ry.abs());
    let phi = rotation_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Step 1: compute (x1', y1'), the midpoint-relative, unrotated coordinates of `from`
    let dx2 = (from.x - to.x) / 2.0;
    let dy2 = (from.y - to.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Step 2: correct radii that are too small for the chord
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    // Step 3: compute (cx', cy')
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;

    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let num = (rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2).max(0.0);
    let denom = rx2 * y1p2 + ry2 * x1p2;
    let co = if denom > 0.0 { sign * (num / denom).sqrt() } else { 0.0 };

    let cxp = co * (rx * y1p / ry);
    let cyp = co * (-ry * x1p / rx);

    let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0;

    // Step 4: compute start angle and sweep angle
    let angle = |ux: f32, uy: f32, vx: f32, vy: f32| -> f32 {
        let dot = ux * vx + uy * vy;
        let len = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
        let sign = if ux * vy - uy * vx < 0.0 { -1.0 } else { 1.0 };
        sign * (dot / len).clamp(-1.0, 1.0).acos()
    };

    let start_deg = angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry).to_degrees();
    let mut sweep_deg = angle((x1p - cxp) / rx, (y1p - cyp) / ry, (-x1p - cxp) / rx, (-y1p - cyp) / ry).to_degrees();

    if !sweep && sweep_deg > 0.0 {
        sweep_deg -= 360.0;
    } else if sweep && sweep_deg < 0.0 {
        sweep_deg += 360.0;
    }

    (Point::new(cx, cy), rx, ry, start_deg, sweep_deg)
}

///
/// Accumulates figures into a `Path`, matching the builder surface an external path-authoring
/// DSL would expose: an immediate-mode cursor, a current transform/origin applied to every point
/// as it is added, and figure/segment accumulation methods.
///
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    finished_figures: Vec<Figure>,
    current_figure: Figure,
    cursor: Point,
    transform: Transform,
}

impl PathBuilder {
    pub fn new() -> PathBuilder {
        PathBuilder::default()
    }

    ///
    /// Starts a new figure at `at`. Any figure under construction is kept and will be included
    /// in the built path.
    ///
    pub fn start_figure(&mut self, at: Point) -> &mut Self {
        self.finish_current_figure();
        self.cursor = at;
        self
    }

    pub fn add_line(&mut self, to: Point) -> &mut Self {
        let from = self.transform.transform_point(self.cursor);
        self.current_figure
            .push_segment(LineSegment::Linear(vec![from, self.transform.transform_point(to)]));
        self.cursor = to;
        self
    }

    pub fn add_lines(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        for point in points {
            self.add_line(point);
        }
        self
    }

    pub fn add_quadratic_bezier(&mut self, control: Point, to: Point) -> &mut Self {
        let p0 = self.transform.transform_point(self.cursor);
        let c = self.transform.transform_point(control);
        let p3 = self.transform.transform_point(to);

        self.current_figure.push_segment(quadratic_to_cubic(p0, c, p3));
        self.cursor = to;
        self
    }

    pub fn add_cubic_bezier(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        let p0 = self.transform.transform_point(self.cursor);
        let c1 = self.transform.transform_point(control1);
        let c2 = self.transform.transform_point(control2);
        let p3 = self.transform.transform_point(to);

        self.current_figure.push_segment(LineSegment::CubicBezier { p0, c1, c2, p3 });
        self.cursor = to;
        self
    }

    ///
    /// Adds an elliptical arc using the SVG endpoint parameterization (radii, x-axis rotation,
    /// the large-arc and sweep flags, and the destination point)
    ///
    pub fn add_elliptical_arc(&mut self, rx: f32, ry: f32, rotation_deg: f32, large_arc: bool, sweep: bool, to: Point) -> &mut Self {
        if self.cursor.x == to.x && self.cursor.y == to.y {
            return self;
        }

        let (center, rx, ry, start_deg, sweep_deg) = endpoint_to_center_arc(self.cursor, rx, ry, rotation_deg, large_arc, sweep, to);

        self.current_figure.push_segment(LineSegment::EllipticalArc {
            center,
            radii: (rx, ry),
            rotation_deg,
            start_deg,
            sweep_deg,
            transform: self.transform,
        });
        self.cursor = to;
        self
    }

    pub fn close_figure(&mut self) -> &mut Self {
        self.current_figure.set_closed(true);
        self
    }

    pub fn close_all_figures(&mut self) -> &mut Self {
        self.current_figure.set_closed(true);
        for figure in &mut self.finished_figures {
            figure.set_closed(true);
        }
        self
    }

    pub fn set_transform(&mut self, transform: Transform) -> &mut Self {
        self.transform = transform;
        self
    }

    pub fn reset_transform(&mut self) -> &mut Self {
        self.transform = Transform::identity();
        self
    }

    pub fn set_origin(&mut self, x: f32, y: f32) -> &mut Self {
        self.transform = self.transform.with_translation(x, y);
        self
    }

    pub fn reset_origin(&mut self) -> &mut Self {
        self.transform = self.transform.with_translation(0.0, 0.0);
        self
    }

    ///
    /// Discards every figure built so far (current and finished), but keeps the transform/origin
    /// in effect so a caller can re-draw the same shape elsewhere without reconfiguring it
    ///
    pub fn clear(&mut self) -> &mut Self {
        self.finished_figures.clear();
        self.current_figure = Figure::new();
        self.cursor = Point::default();
        self
    }

    ///
    /// Fully resets the builder: figures, transform and cursor all return to their initial state
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.clear();
        self.transform = Transform::identity();
        self
    }

    fn finish_current_figure(&mut self) {
        let finished = std::mem::replace(&mut self.current_figure, Figure::new());
        if !finished.is_empty() {
            self.finished_figures.push(finished);
        }
    }

    pub fn build(&self) -> Path {
        let mut figures = self.finished_figures.clone();
        if !self.current_figure.is_empty() {
            figures.push(self.current_figure.clone());
        }

        Path::build(figures)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::path::path::IPath;

    #[test]
    fn builds_a_single_closed_triangle() {
        let mut builder = PathBuilder::new();
        builder
            .start_figure(Point::new(0.0, 0.0))
            .add_line(Point::new(10.0, 0.0))
            .add_line(Point::new(5.0, 10.0))
            .close_figure();

        let path = builder.build();
        assert_eq!(path.figures().len(), 1);
        assert!(path.figures()[0].is_closed());
        assert_eq!(path.figures()[0].flatten().len(), 3);
    }

    #[test]
    fn set_origin_translates_subsequent_points_only() {
        let mut builder = PathBuilder::new();
        builder.start_figure(Point::new(0.0, 0.0)).add_line(Point::new(1.0, 0.0));
        builder.set_origin(100.0, 100.0);
        builder.add_line(Point::new(2.0, 0.0));

        let path = builder.build();
        let points = path.figures()[0].flatten();
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[1], Point::new(1.0, 0.0));
        assert_eq!(points[2], Point::new(102.0, 100.0));
    }

    #[test]
    fn multiple_figures_produce_a_complex_polygon() {
        let mut builder = PathBuilder::new();
        builder
            .start_figure(Point::new(0.0, 0.0))
            .add_line(Point::new(1.0, 0.0))
            .add_line(Point::new(1.0, 1.0))
            .close_figure();
        builder
            .start_figure(Point::new(5.0, 5.0))
            .add_line(Point::new(6.0, 5.0))
            .add_line(Point::new(6.0, 6.0))
            .close_figure();

        let path = builder.build();
        assert_eq!(path.figures().len(), 2);
    }

    #[test]
    fn clear_keeps_transform() {
        let mut builder = PathBuilder::new();
        builder.set_origin(10.0, 10.0);
        builder.start_figure(Point::new(0.0, 0.0)).add_line(Point::new(1.0, 0.0));
        builder.clear();
        builder.start_figure(Point::new(0.0, 0.0)).add_line(Point::new(1.0, 0.0));

        let path = builder.build();
        let points = path.figures()[0].flatten();
        assert_eq!(points[0], Point::new(10.0, 10.0));
    }

    #[test]
    fn reset_clears_transform_too() {
        let mut builder = PathBuilder::new();
        builder.set_origin(10.0, 10.0);
        builder.reset();
        builder.start_figure(Point::new(0.0, 0.0)).add_line(Point::new(1.0, 0.0));

        let path = builder.build();
        let points = path.figures()[0].flatten();
        assert_eq!(points[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn semicircle_arc_flattens_to_a_half_turn() {
        let mut builder = PathBuilder::new();
        builder
            .start_figure(Point::new(-10.0, 0.0))
            .add_elliptical_arc(10.0, 10.0, 0.0, false, true, Point::new(10.0, 0.0));

        let path = builder.build();
        let points = path.figures()[0].flatten();

        assert_eq!(*points.first().unwrap(), Point::new(-10.0, 0.0));
        let last = *points.last().unwrap();
        assert!(last.distance_to(Point::new(10.0, 0.0)) < 1e-2);

        // the arc should bulge away from the chord
        let mid = points[points.len() / 2];
        assert!(mid.y.abs() > 5.0);
    }
}
