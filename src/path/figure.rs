/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::segment::LineSegment;
use crate::geometry::Point;

///
/// An ordered list of segments, plus whether the path loops back from the last segment's end to
/// the first segment's start
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Figure {
    segments: Vec<LineSegment>,
    is_closed: bool,
}

impl Figure {
    pub fn new() -> Figure {
        Figure {
            segments: Vec::new(),
            is_closed: false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn set_closed(&mut self, closed: bool) {
        self.is_closed = closed;
    }

    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    #[inline]
    pub fn push_segment(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    pub fn is_finite(&self) -> bool {
        self.segments.iter().all(LineSegment::is_finite)
    }

    ///
    /// Flattens every segment in order into a single polyline. Consecutive duplicate points
    /// (including at the join between consecutive segments) are dropped; if the figure is
    /// closed, the polyline is implicitly closed by joining the last point back to the first
    /// (again dropping the duplicate if the figure already ends where it starts).
    ///
    pub fn flatten(&self) -> Vec<Point> {
        let mut points = Vec::new();

        for segment in &self.segments {
            let mut segment_points = segment.flatten();

            if let Some(&last) = points.last() {
                if let Some(&first) = segment_points.first() {
                    if points_equal(last, first) {
                        segment_points.remove(0);
                    }
                }
            }

            points.extend(segment_points);
        }

        if self.is_closed {
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                if points_equal(first, last) {
                    points.pop();
                }
            }
        }

        points
    }
}

#[inline]
fn points_equal(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_figure_is_empty() {
        assert!(Figure::new().is_empty());
    }

    #[test]
    fn flatten_drops_duplicate_joins() {
        let mut figure = Figure::new();
        figure.push_segment(LineSegment::Linear(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]));
        figure.push_segment(LineSegment::Linear(vec![Point::new(1.0, 0.0), Point::new(1.0, 1.0)]));

        assert_eq!(
            figure.flatten(),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]
        );
    }

    #[test]
    fn closed_figure_drops_trailing_duplicate_of_start() {
        let mut figure = Figure::new();
        figure.push_segment(LineSegment::Linear(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ]));
        figure.set_closed(true);

        assert_eq!(
            figure.flatten(),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]
        );
    }
}
