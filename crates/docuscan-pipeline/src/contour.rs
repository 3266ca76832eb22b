// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contour selection — extract closed boundary curves from the edge map,
// rank them by enclosed area, and pick the first whose simplified polygon
// has exactly four vertices: the candidate document boundary.

use docuscan_core::{OrderedQuad, Point2D, Result, ScanError};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::contours::find_contours;
use imageproc::drawing::draw_line_segment_mut;
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;
use tracing::{debug, instrument};

/// Find the document boundary in a binary edge map.
///
/// All borders are traced without hierarchy (outer and hole borders compete
/// equally), ranked by enclosed area descending, and only the
/// `max_candidates` largest are considered. Each candidate is simplified
/// with a tolerance of `epsilon_ratio` times its closed perimeter; the first
/// simplification with exactly four vertices wins.
///
/// Fails with [`ScanError::NoDocumentFound`] when no candidate simplifies to
/// four vertices — there is no fallback to a previous result.
#[instrument(skip(edges), fields(width = edges.width(), height = edges.height()))]
pub fn select_document_quad(
    edges: &GrayImage,
    max_candidates: usize,
    epsilon_ratio: f64,
) -> Result<[Point2D; 4]> {
    let mut ranked: Vec<(f64, Vec<Point<i32>>)> = find_contours::<i32>(edges)
        .into_iter()
        .map(|c| (enclosed_area(&c.points), c.points))
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    debug!(contours = ranked.len(), "contours traced");

    for (area, points) in ranked.iter().take(max_candidates) {
        if points.len() < 4 {
            continue;
        }
        let perimeter = arc_length(points, true);
        let simplified = approximate_polygon_dp(points, epsilon_ratio * perimeter, true);
        debug!(
            area,
            perimeter,
            vertices = simplified.len(),
            "candidate contour simplified"
        );
        if simplified.len() == 4 {
            return Ok([
                to_point2d(simplified[0]),
                to_point2d(simplified[1]),
                to_point2d(simplified[2]),
                to_point2d(simplified[3]),
            ]);
        }
    }

    Err(ScanError::NoDocumentFound {
        candidates: max_candidates,
    })
}

/// Draw the detected boundary onto an image, corner to corner.
pub fn draw_quad_outline(canvas: &mut RgbImage, quad: &OrderedQuad) {
    const OUTLINE: Rgb<u8> = Rgb([0, 255, 0]);
    let corners = quad.corners();
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        draw_line_segment_mut(canvas, (a.x, a.y), (b.x, b.y), OUTLINE);
    }
}

/// Enclosed area of a closed pixel contour (shoelace formula).
fn enclosed_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += points[i].x as i64 * points[j].y as i64;
        twice_area -= points[j].x as i64 * points[i].y as i64;
    }
    (twice_area.abs() as f64) / 2.0
}

fn to_point2d(p: Point<i32>) -> Point2D {
    Point2D::new(p.x as f32, p.y as f32)
}
