/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::scan_edge::{Endpoint, NonZeroIntersectionType, ScanEdge, ScanEdgeCollection};
use crate::multipolygon::TessellatedMultipolygon;

///
/// Compiles every ring of `multipolygon` into a flat `ScanEdgeCollection`, snapping vertex y
/// coordinates to the subpixel grid implied by `subsampling` before classifying them.
///
/// `subsampling` is the number of subpixel scan lines per whole pixel row (see the scanner); a
/// vertex's y is snapped to `round(y * subsampling) / subsampling` so that vertices which are
/// meant to land exactly on a subpixel line do, even after upstream floating-point drift.
///
pub fn compile(multipolygon: &TessellatedMultipolygon, subsampling: u32) -> ScanEdgeCollection {
    let s = subsampling as f32;
    let mut edges = Vec::new();

    for ring in multipolygon.rings() {
        compile_ring(ring.points(), s, &mut edges);
    }

    ScanEdgeCollection::new(edges)
}

fn snap_y(y: f32, s: f32) -> f32 {
    (y * s).round() / s
}

/// -1 decreasing, 0 horizontal, 1 increasing
fn edge_direction(a_y: f32, b_y: f32) -> i8 {
    if a_y == b_y {
        0
    } else if b_y > a_y {
        1
    } else {
        -1
    }
}

fn compile_ring(points: &[crate::geometry::Point], s: f32, out: &mut Vec<ScanEdge>) {
    let n = points.len();
    if n < 3 {
        return;
    }

    let snapped_y: Vec<f32> = points.iter().map(|p| snap_y(p.y, s)).collect();
    let dir: Vec<i8> = (0..n).map(|i| edge_direction(snapped_y[i], snapped_y[(i + 1) % n])).collect();

    if dir.iter().all(|&d| d == 0) {
        // fully horizontal ring: no area, nothing to scan
        return;
    }

    let mut edge_index_of: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        if dir[i] == 0 {
            continue;
        }

        let a = points[i];
        let b = points[(i + 1) % n];
        let ay = snapped_y[i];
        let by = snapped_y[(i + 1) % n];

        let edge = if dir[i] == 1 {
            // ring order a -> b has increasing y: edge goes from y0 (=a) down to y1 (=b), not "up"
            ScanEdge::new(ay, by, a.x, b.x, false)
        } else {
            // ring order a -> b has decreasing y: edge goes from y1 (=a) up to y0 (=b)
            ScanEdge::new(by, ay, b.x, a.x, true)
        };

        edge_index_of[i] = Some(out.len());
        out.push(edge);
    }

    // classify every vertex against its nearest non-horizontal neighbour edges, propagating
    // through any horizontal run in between
    for j in 0..n {
        let prev = find_prev_nonhorizontal(&dir, j, n);
        let next = find_next_nonhorizontal(&dir, j, n);

        let (prev_edge, prev_dir) = match prev {
            Some(found) => found,
            None => continue,
        };
        let (next_edge, next_dir) = match next {
            Some(found) => found,
            None => continue,
        };

        if prev_edge == next_edge {
            // only one non-horizontal edge in the whole ring: nothing to classify against
            continue;
        }

        // the endpoint of `prev_edge` that faces this vertex chain is its arrival point (i+1)
        let prev_end = if prev_dir == 1 { Endpoint::One } else { Endpoint::Zero };
        // the endpoint of `next_edge` that faces this vertex chain is its departure point (k)
        let next_end = if next_dir == 1 { Endpoint::Zero } else { Endpoint::One };

        let prev_idx = edge_index_of[prev_edge].expect("non-horizontal edge must have been compiled");
        let next_idx = edge_index_of[next_edge].expect("non-horizontal edge must have been compiled");

        // true iff `prev_edge` and `next_edge` meet at this vertex directly, with no horizontal
        // run of edges between them; false means the two edges bracket a run of one or more
        // horizontal edges, and `prev_edge`/`next_edge` end at two distinct vertices (the run's
        // own left and right corners), not the one vertex this loop iteration is named after.
        let direct = (prev_edge + 1) % n == next_edge;

        if prev_dir == next_dir {
            if direct {
                // piercing: the ring's y direction continues straight through this single vertex.
                // Each side emits one crossing, tagged so the non-zero rule can collapse the
                // duplicate pair (both land at the same x, since they share this vertex).
                out[prev_idx].set_intersection_type(prev_end, NonZeroIntersectionType::Corner);
                out[next_idx].set_intersection_type(next_end, NonZeroIntersectionType::Corner);
            } else {
                // piercing through a horizontal jog: the run's two corners sit at different x, so
                // there is nothing to pair up. The run's left corner (`prev_edge`'s own endpoint)
                // doubles to account for the jog; the run's right corner (`next_edge`) is an
                // ordinary, independent crossing and is left at its default emit of one.
                out[prev_idx].set_emit(prev_end, 2);
            }
        } else if direct {
            // touching: a local min/max at this single vertex. One side carries both crossings,
            // the other carries none; which side is arbitrary but must be fixed, so always the
            // arriving edge (`prev_edge`).
            out[prev_idx].set_emit(prev_end, 2);
            out[next_idx].set_emit(next_end, 0);
        } else {
            // touching across a horizontal run: the run's two corners are two distinct points,
            // each its own local extremum, so both double independently rather than splitting
            // one pair of crossings between them.
            out[prev_idx].set_emit(prev_end, 2);
            out[next_idx].set_emit(next_end, 2);
        }
    }
}

fn find_prev_nonhorizontal(dir: &[i8], vertex: usize, n: usize) -> Option<(usize, i8)> {
    let mut i = (vertex + n - 1) % n;
    for _ in 0..n {
        if dir[i] != 0 {
            return Some((i, dir[i]));
        }
        i = (i + n - 1) % n;
    }
    None
}

fn find_next_nonhorizontal(dir: &[i8], vertex: usize, n: usize) -> Option<(usize, i8)> {
    let mut i = vertex % n;
    for _ in 0..n {
        if dir[i] != 0 {
            return Some((i, dir[i]));
        }
        i = (i + 1) % n;
    }
    None
}
