/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_scan_raster::{FillRule, OrientationHandling, PathBuilder, PolygonScanner};

fn sweep(path: &flo_scan_raster::Path, min_y: i32, max_y: i32, rule: FillRule, orientation: OrientationHandling) -> Vec<Vec<f32>> {
    let mut scanner = PolygonScanner::create(path, min_y, max_y, 1, rule, orientation).unwrap();

    let mut rows = Vec::new();
    while scanner.move_to_next_pixel_line() {
        while scanner.move_to_next_subpixel_scan_line() {
            rows.push(scanner.scan_current_line().to_vec());
        }
    }
    rows
}

fn square_path(origin: (f32, f32), size: f32) -> flo_scan_raster::Path {
    let mut builder = PathBuilder::new();
    builder
        .start_figure((origin.0, origin.1).into())
        .add_line((origin.0 + size, origin.1).into())
        .add_line((origin.0 + size, origin.1 + size).into())
        .add_line((origin.0, origin.1 + size).into())
        .close_figure();
    builder.build()
}

#[test]
fn square_produces_one_span_every_interior_row() {
    let path = square_path((0.0, 0.0), 10.0);
    let rows = sweep(&path, 0, 10, FillRule::OddEven, OrientationHandling::default());

    // max_y is inclusive, so rows 0..=10 are visited: 11 total
    assert_eq!(rows.len(), 11);

    // the first and last rows land exactly on the square's horizontal top/bottom edges, where
    // both vertical sides double independently; every row strictly in between is a plain span
    assert_eq!(rows[0], vec![0.0, 0.0, 10.0, 10.0]);
    assert_eq!(rows[10], vec![0.0, 0.0, 10.0, 10.0]);
    for row in &rows[1..10] {
        assert_eq!(row, &vec![0.0, 10.0]);
    }
}

// A rectangle with a reflex notch cut into its left side, reaching its deepest point at
// (5.0, 4.0). That vertex is a piercing vertex under this crate's classification (the ring's y
// keeps increasing through it, from the lower slanted edge to the upper one), so the scan line
// that runs exactly through it is the case that exposed the odd-even/Corner-collapse bug: two
// raw Corner crossings at x=5 that must fold into one, or the row's crossing count comes out odd.
// Its top and bottom sides are horizontal, so the rows exactly at y=0 and y=8 also exercise the
// horizontal-run corner doubling.
fn notched_rectangle() -> flo_scan_raster::Path {
    let mut builder = PathBuilder::new();
    builder
        .start_figure((0.0, 0.0).into())
        .add_line((5.0, 4.0).into())
        .add_line((0.0, 8.0).into())
        .add_line((10.0, 8.0).into())
        .add_line((10.0, 0.0).into())
        .close_figure();
    builder.build()
}

#[test]
fn every_row_of_the_notched_rectangle_has_even_crossings_in_sorted_order() {
    let path = notched_rectangle();
    let rows = sweep(&path, 0, 8, FillRule::OddEven, OrientationHandling::default());

    // max_y is inclusive, so rows 0..=8 are visited: 9 total
    assert_eq!(rows.len(), 9);
    for row in &rows {
        assert_eq!(row.len() % 2, 0, "row {row:?} has an odd crossing count");
        assert!(row.windows(2).all(|w| w[0] <= w[1]), "row {row:?} is not sorted");
    }
}

#[test]
fn piercing_vertex_row_collapses_to_the_notch_tip() {
    let path = notched_rectangle();
    let rows = sweep(&path, 0, 8, FillRule::OddEven, OrientationHandling::default());

    // pixel row 4 sweeps at y=4.0 exactly, the notch's deepest point: the interior there spans
    // from the notch tip (x=5) to the rectangle's right edge (x=10), a single two-point span.
    assert_eq!(rows[4], vec![5.0, 10.0]);
}

#[test]
fn rows_above_and_below_the_notch_cross_left_of_the_tip() {
    let path = notched_rectangle();
    let rows = sweep(&path, 0, 8, FillRule::OddEven, OrientationHandling::default());

    // away from the notch's tip the slanted edges sit left of x=5, so the interior span is wider
    assert!(rows[2][0] < 5.0);
    assert!(rows[6][0] < 5.0);
}

#[test]
fn notched_rectangle_top_and_bottom_rows_double_both_horizontal_corners() {
    let path = notched_rectangle();
    let rows = sweep(&path, 0, 8, FillRule::OddEven, OrientationHandling::default());

    // y=0 and y=8 land exactly on the rectangle's flat bottom and top edges; both the left corner
    // and the right corner of each flat edge double independently (the horizontal-run case),
    // rather than splitting one pair of crossings between them.
    assert_eq!(rows[0], vec![0.0, 0.0, 10.0, 10.0]);
    assert_eq!(rows[8], vec![0.0, 0.0, 10.0, 10.0]);
}

#[test]
fn rectangle_with_a_rectangular_hole_leaves_a_gap() {
    let mut builder = PathBuilder::new();
    builder
        .start_figure((0.0, 0.0).into())
        .add_line((20.0, 0.0).into())
        .add_line((20.0, 20.0).into())
        .add_line((0.0, 20.0).into())
        .close_figure();
    builder
        .start_figure((5.0, 5.0).into())
        .add_line((15.0, 5.0).into())
        .add_line((15.0, 15.0).into())
        .add_line((5.0, 15.0).into())
        .close_figure();

    let path = builder.build();
    let rows = sweep(&path, 0, 20, FillRule::OddEven, OrientationHandling::default());

    // outside the hole's y-range: one solid span across the outer rectangle
    assert_eq!(rows[2], vec![0.0, 20.0]);

    // inside the hole's y-range: outer edges, then the hole punches a gap in the middle
    assert_eq!(rows[10], vec![0.0, 5.0, 15.0, 20.0]);
}

// Two same-direction overlapping squares, kept exactly as authored (neither is a hole of the
// other). The classic odd-even/non-zero divergence: the overlap toggles the boundary an even
// number of times (odd-even sees it as a gap) but the winding number there is 2, still non-zero
// (non-zero sees it as solid fill).
#[test]
fn overlapping_same_direction_squares_differ_between_fill_rules() {
    let mut builder = PathBuilder::new();
    builder
        .start_figure((0.0, 0.0).into())
        .add_line((10.0, 0.0).into())
        .add_line((10.0, 10.0).into())
        .add_line((0.0, 10.0).into())
        .close_figure();
    builder
        .start_figure((5.0, 0.0).into())
        .add_line((15.0, 0.0).into())
        .add_line((15.0, 10.0).into())
        .add_line((5.0, 10.0).into())
        .close_figure();

    let path = builder.build();

    let odd_even = sweep(&path, 0, 10, FillRule::OddEven, OrientationHandling::KeepOriginal);
    let nonzero = sweep(&path, 0, 10, FillRule::Nonzero, OrientationHandling::KeepOriginal);

    assert_eq!(odd_even[5], vec![0.0, 5.0, 10.0, 15.0]);
    assert_eq!(nonzero[5], vec![0.0, 15.0]);
}

#[test]
fn translating_a_path_shifts_every_crossing_by_the_same_offset() {
    const OFFSET: f32 = 100_000.0;

    let base = notched_rectangle();
    let mut shifted_builder = PathBuilder::new();
    shifted_builder.set_origin(OFFSET, OFFSET);
    shifted_builder
        .start_figure((0.0, 0.0).into())
        .add_line((5.0, 4.0).into())
        .add_line((0.0, 8.0).into())
        .add_line((10.0, 8.0).into())
        .add_line((10.0, 0.0).into())
        .close_figure();
    let shifted = shifted_builder.build();

    let base_rows = sweep(&base, 0, 8, FillRule::OddEven, OrientationHandling::default());
    let shifted_rows = sweep(&shifted, 100_000, 100_008, FillRule::OddEven, OrientationHandling::default());

    assert_eq!(base_rows.len(), shifted_rows.len());
    for (base_row, shifted_row) in base_rows.iter().zip(shifted_rows.iter()) {
        assert_eq!(base_row.len(), shifted_row.len());
        for (b, s) in base_row.iter().zip(shifted_row.iter()) {
            assert!((s - (b + OFFSET)).abs() < 1e-1, "base={b} shifted={s}");
        }
    }
}

#[test]
fn degenerate_zero_area_figure_yields_no_crossings() {
    let mut builder = PathBuilder::new();
    builder
        .start_figure((3.0, 3.0).into())
        .add_line((3.0, 3.0).into())
        .add_line((3.0, 3.0).into())
        .close_figure();

    let path = builder.build();
    let rows = sweep(&path, 0, 6, FillRule::OddEven, OrientationHandling::default());

    // max_y is inclusive, so rows 0..=6 are visited: 7 total
    assert_eq!(rows.len(), 7);
    for row in &rows {
        assert!(row.is_empty());
    }
}
