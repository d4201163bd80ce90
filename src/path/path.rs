/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::figure::Figure;

///
/// Anything that can be enumerated as a set of figures. This is the only thing the rest of the
/// crate assumes about a path: it does not care whether it was built with `PathBuilder` or
/// assembled by hand.
///
pub trait IPath {
    fn figures(&self) -> &[Figure];
}

///
/// A path containing exactly one non-empty figure
///
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(Figure);

impl Polygon {
    pub fn new(figure: Figure) -> Polygon {
        Polygon(figure)
    }

    pub fn figure(&self) -> &Figure {
        &self.0
    }
}

impl IPath for Polygon {
    fn figures(&self) -> &[Figure] {
        std::slice::from_ref(&self.0)
    }
}

///
/// A path containing zero, two, or more figures
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplexPolygon {
    figures: Vec<Figure>,
}

impl ComplexPolygon {
    pub fn new(figures: Vec<Figure>) -> ComplexPolygon {
        ComplexPolygon { figures }
    }
}

impl IPath for ComplexPolygon {
    fn figures(&self) -> &[Figure] {
        &self.figures
    }
}

///
/// The result of building a path: a single `Polygon` when the caller only ever produced one
/// non-empty figure, a `ComplexPolygon` otherwise (including the zero-figure case)
///
#[derive(Clone, Debug, PartialEq)]
pub enum Path {
    Polygon(Polygon),
    Complex(ComplexPolygon),
}

impl Path {
    ///
    /// Builds a `Path` from a set of figures, stripping empty ones and collapsing to a `Polygon`
    /// when exactly one non-empty figure remains
    ///
    pub fn build(figures: Vec<Figure>) -> Path {
        let mut non_empty: Vec<Figure> = figures.into_iter().filter(|figure| !figure.is_empty()).collect();

        if non_empty.len() == 1 {
            Path::Polygon(Polygon::new(non_empty.pop().unwrap()))
        } else {
            Path::Complex(ComplexPolygon::new(non_empty))
        }
    }

    pub fn empty() -> Path {
        Path::Complex(ComplexPolygon::default())
    }

    pub fn is_empty(&self) -> bool {
        self.figures().is_empty()
    }
}

impl IPath for Path {
    fn figures(&self) -> &[Figure] {
        match self {
            Path::Polygon(polygon) => polygon.figures(),
            Path::Complex(complex) => complex.figures(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Point;
    use crate::path::segment::LineSegment;

    fn figure_with_point(x: f32, y: f32) -> Figure {
        let mut figure = Figure::new();
        figure.push_segment(LineSegment::Linear(vec![Point::new(x, y), Point::new(x + 1.0, y)]));
        figure
    }

    #[test]
    fn single_non_empty_figure_builds_a_polygon() {
        let path = Path::build(vec![figure_with_point(0.0, 0.0)]);
        assert!(matches!(path, Path::Polygon(_)));
        assert_eq!(path.figures().len(), 1);
    }

    #[test]
    fn empty_figures_are_stripped() {
        let path = Path::build(vec![Figure::new(), figure_with_point(0.0, 0.0), Figure::new()]);
        assert!(matches!(path, Path::Polygon(_)));
    }

    #[test]
    fn multiple_figures_build_a_complex_polygon() {
        let path = Path::build(vec![figure_with_point(0.0, 0.0), figure_with_point(5.0, 5.0)]);
        assert!(matches!(path, Path::Complex(_)));
        assert_eq!(path.figures().len(), 2);
    }

    #[test]
    fn no_figures_builds_an_empty_complex_polygon() {
        let path = Path::build(vec![]);
        assert!(path.is_empty());
    }
}
