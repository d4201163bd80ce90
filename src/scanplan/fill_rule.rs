/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::active_edge_list::RawCrossing;
use crate::edges::NonZeroIntersectionType;

///
/// Which interior test a `PolygonScanner` applies to raw boundary crossings
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRule {
    /// Inside iff an arbitrary ray from the point crosses the boundary an odd number of times
    OddEven,

    /// Inside iff the signed sum of boundary crossings (CCW = +1, CW = -1) is non-zero
    Nonzero,
}

///
/// Reduces a sorted slice of raw crossings to the fill rule's output sequence, clearing and
/// filling `out`.
///
pub fn classify_crossings(rule: FillRule, sorted: &[RawCrossing], out: &mut Vec<f32>) {
    out.clear();

    match rule {
        FillRule::OddEven => classify_odd_even(sorted, out),
        FillRule::Nonzero => classify_nonzero(sorted, out),
    }
}

///
/// A piercing vertex still produces two raw `Corner` entries at the same x (one per incident
/// edge), even though it is a single physical crossing of the boundary. Odd-even has to collapse
/// those pairs the same way non-zero does, or a scan line through a piercing vertex yields an
/// odd-length (invalid) result; everything that is not a `Corner` entry (an ordinary mid-edge
/// crossing, or either side of a touching vertex's doubled emit) passes through literally.
///
fn classify_odd_even(sorted: &[RawCrossing], out: &mut Vec<f32>) {
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j].x == sorted[i].x {
            j += 1;
        }

        let group = &sorted[i..j];
        let corner_count = group.iter().filter(|c| c.kind == NonZeroIntersectionType::Corner).count();
        let other_count = group.len() - corner_count;
        let emits = corner_count / 2 + other_count;

        for _ in 0..emits {
            out.push(sorted[i].x);
        }

        i = j;
    }
}

fn classify_nonzero(sorted: &[RawCrossing], out: &mut Vec<f32>) {
    let mut groups: Vec<(f32, i32)> = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j].x == sorted[i].x {
            j += 1;
        }

        groups.push((sorted[i].x, collapse_group(&sorted[i..j])));
        i = j;
    }

    let mut winding = 0i32;
    for (x, delta) in groups {
        let was_zero = winding == 0;
        winding += delta;
        let is_zero = winding == 0;

        if was_zero != is_zero {
            out.push(x);
        }
    }
}

///
/// Collapses a group of crossings sharing the same x into a single net winding delta.
/// `Corner`-tagged entries are the duplicate halves of a piercing vertex: every pair of them
/// collapses to a single unit of their (shared) contribution sign rather than being summed
/// directly, since they represent one physical boundary crossing, not two.
///
fn collapse_group(group: &[RawCrossing]) -> i32 {
    let mut corner_sum = 0i32;
    let mut corner_count = 0i32;
    let mut other_sum = 0i32;

    for crossing in group {
        match crossing.kind {
            NonZeroIntersectionType::Corner => {
                corner_sum += crossing.contribution;
                corner_count += 1;
            }
            NonZeroIntersectionType::Up | NonZeroIntersectionType::Down => {
                other_sum += crossing.contribution;
            }
        }
    }

    let corner_net = if corner_count > 0 {
        let unit = corner_sum / corner_count;
        unit * (corner_count / 2)
    } else {
        0
    };

    corner_net + other_sum
}
