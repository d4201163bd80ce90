/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rayon::prelude::*;

use crate::error::ScanResult;
use crate::multipolygon::OrientationHandling;
use crate::path::Path;
use crate::scanplan::{FillRule, PolygonScanner};

///
/// One independent scan job for `scan_paths_parallel`
///
#[derive(Clone, Copy, Debug)]
pub struct ScanRequest<'a> {
    pub path: &'a Path,
    pub min_y: i32,
    pub max_y: i32,
    pub subsampling: i32,
    pub rule: FillRule,
    pub orientation: OrientationHandling,
}

///
/// Runs `requests` across a `rayon` thread pool, one `PolygonScanner` per request, and collects
/// each scanner's full set of subpixel-scan-line crossing vectors in request order. Pure sugar
/// over constructing N independent scanners: it owns no state across calls and does not change
/// the single-scanner contract (a `PolygonScanner` is still sequential and single-owner within
/// its own thread).
///
pub fn scan_paths_parallel(requests: &[ScanRequest]) -> Vec<ScanResult<Vec<Vec<f32>>>> {
    requests.par_iter().map(scan_one).collect()
}

fn scan_one(request: &ScanRequest) -> ScanResult<Vec<Vec<f32>>> {
    let mut scanner = PolygonScanner::create(
        request.path,
        request.min_y,
        request.max_y,
        request.subsampling,
        request.rule,
        request.orientation,
    )?;

    let mut rows = Vec::new();

    while scanner.move_to_next_pixel_line() {
        while scanner.move_to_next_subpixel_scan_line() {
            rows.push(scanner.scan_current_line().to_vec());
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Point;
    use crate::path::{Figure, LineSegment};

    fn square_path(size: f32) -> Path {
        let mut figure = Figure::new();
        figure.push_segment(LineSegment::Linear(vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]));
        figure.set_closed(true);
        Path::build(vec![figure])
    }

    #[test]
    fn runs_several_independent_requests() {
        let a = square_path(4.0);
        let b = square_path(8.0);

        let requests = vec![
            ScanRequest {
                path: &a,
                min_y: 0,
                max_y: 4,
                subsampling: 1,
                rule: FillRule::OddEven,
                orientation: OrientationHandling::default(),
            },
            ScanRequest {
                path: &b,
                min_y: 0,
                max_y: 8,
                subsampling: 1,
                rule: FillRule::OddEven,
                orientation: OrientationHandling::default(),
            },
        ];

        let results = scan_paths_parallel(&requests);
        assert_eq!(results.len(), 2);

        let rows_a = results[0].as_ref().unwrap();
        let rows_b = results[1].as_ref().unwrap();

        // max_y is inclusive, so an axis-aligned square scanned from 0 to its own size visits one
        // extra boundary row at the top, on top of the `size` interior rows
        assert_eq!(rows_a.len(), 5);
        assert_eq!(rows_b.len(), 9);

        // top and bottom rows land exactly on the square's horizontal edges, so both vertical
        // sides double independently there; every interior row sees a plain two-point span
        assert_eq!(rows_a[0], vec![0.0, 0.0, 4.0, 4.0]);
        assert_eq!(rows_a[4], vec![0.0, 0.0, 4.0, 4.0]);
        assert_eq!(rows_a[2], vec![0.0, 4.0]);

        assert_eq!(rows_b[0], vec![0.0, 0.0, 8.0, 8.0]);
        assert_eq!(rows_b[8], vec![0.0, 0.0, 8.0, 8.0]);
        assert_eq!(rows_b[4], vec![0.0, 8.0]);
    }
}
