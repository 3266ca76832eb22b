// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core geometric types for the scan pipeline.

use serde::{Deserialize, Serialize};

/// A point in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2D) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Factor relating coordinates in the downsampled working image back to the
/// original full-resolution image. Computed once per scan and applied exactly
/// once, when the detected boundary is handed to the rectifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRatio(pub f32);

impl ScaleRatio {
    pub fn apply(&self, point: Point2D) -> Point2D {
        Point2D::new(point.x * self.0, point.y * self.0)
    }
}

/// Document boundary corners in canonical order:
/// [top-left, top-right, bottom-right, bottom-left].
///
/// Constructed only through [`OrderedQuad::from_points`], so the order is a
/// pure function of point geometry, never of input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderedQuad {
    corners: [Point2D; 4],
}

impl OrderedQuad {
    /// Order four boundary points geometrically.
    ///
    /// The top-left corner has the smallest coordinate sum (x + y) and the
    /// bottom-right the largest; the top-right has the largest difference
    /// (x - y) and the bottom-left the smallest. Assumes the points are in
    /// general position; on a tie the first point encountered wins.
    pub fn from_points(points: [Point2D; 4]) -> Self {
        let top_left = first_min(&points, |p| p.x + p.y);
        let bottom_right = first_max(&points, |p| p.x + p.y);
        let top_right = first_max(&points, |p| p.x - p.y);
        let bottom_left = first_min(&points, |p| p.x - p.y);
        Self {
            corners: [top_left, top_right, bottom_right, bottom_left],
        }
    }

    pub fn corners(&self) -> &[Point2D; 4] {
        &self.corners
    }

    pub fn top_left(&self) -> Point2D {
        self.corners[0]
    }

    pub fn top_right(&self) -> Point2D {
        self.corners[1]
    }

    pub fn bottom_right(&self) -> Point2D {
        self.corners[2]
    }

    pub fn bottom_left(&self) -> Point2D {
        self.corners[3]
    }

    /// Map all corners back to full-resolution coordinates.
    pub fn scale(&self, ratio: ScaleRatio) -> Self {
        Self {
            corners: self.corners.map(|p| ratio.apply(p)),
        }
    }
}

/// First point with the strictly smallest key; earlier points win ties.
fn first_min(points: &[Point2D; 4], key: impl Fn(&Point2D) -> f32) -> Point2D {
    let mut best = points[0];
    let mut best_key = key(&points[0]);
    for p in &points[1..] {
        let k = key(p);
        if k < best_key {
            best = *p;
            best_key = k;
        }
    }
    best
}

/// First point with the strictly largest key; earlier points win ties.
fn first_max(points: &[Point2D; 4], key: impl Fn(&Point2D) -> f32) -> Point2D {
    let mut best = points[0];
    let mut best_key = key(&points[0]);
    for p in &points[1..] {
        let k = key(p);
        if k > best_key {
            best = *p;
            best_key = k;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skewed_quad() -> [Point2D; 4] {
        [
            Point2D::new(12.0, 18.0),   // top-left
            Point2D::new(402.0, 31.0),  // top-right
            Point2D::new(418.0, 377.0), // bottom-right
            Point2D::new(24.0, 395.0),  // bottom-left
        ]
    }

    /// Generate every permutation of four indices (Heap's algorithm).
    fn permutations() -> Vec<[usize; 4]> {
        let mut out = Vec::with_capacity(24);
        let mut idx = [0usize, 1, 2, 3];
        heap(&mut idx, 4, &mut out);
        out
    }

    fn heap(idx: &mut [usize; 4], k: usize, out: &mut Vec<[usize; 4]>) {
        if k == 1 {
            out.push(*idx);
            return;
        }
        for i in 0..k {
            heap(idx, k - 1, out);
            if k % 2 == 0 {
                idx.swap(i, k - 1);
            } else {
                idx.swap(0, k - 1);
            }
        }
    }

    #[test]
    fn ordering_is_canonical() {
        let quad = OrderedQuad::from_points(skewed_quad());
        assert_eq!(quad.top_left(), Point2D::new(12.0, 18.0));
        assert_eq!(quad.top_right(), Point2D::new(402.0, 31.0));
        assert_eq!(quad.bottom_right(), Point2D::new(418.0, 377.0));
        assert_eq!(quad.bottom_left(), Point2D::new(24.0, 395.0));
    }

    /// The same four slots must come out regardless of input order.
    #[test]
    fn ordering_is_permutation_invariant() {
        let pts = skewed_quad();
        let reference = OrderedQuad::from_points(pts);
        for perm in permutations() {
            let shuffled = [pts[perm[0]], pts[perm[1]], pts[perm[2]], pts[perm[3]]];
            assert_eq!(
                OrderedQuad::from_points(shuffled),
                reference,
                "permutation {perm:?} produced a different ordering"
            );
        }
    }

    #[test]
    fn axis_aligned_rectangle_orders_cleanly() {
        let quad = OrderedQuad::from_points([
            Point2D::new(300.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 200.0),
            Point2D::new(300.0, 200.0),
        ]);
        assert_eq!(quad.top_left(), Point2D::new(0.0, 0.0));
        assert_eq!(quad.top_right(), Point2D::new(300.0, 0.0));
        assert_eq!(quad.bottom_right(), Point2D::new(300.0, 200.0));
        assert_eq!(quad.bottom_left(), Point2D::new(0.0, 200.0));
    }

    #[test]
    fn scale_maps_back_to_full_resolution() {
        let quad = OrderedQuad::from_points(skewed_quad()).scale(ScaleRatio(2.0));
        assert_eq!(quad.top_left(), Point2D::new(24.0, 36.0));
        assert_eq!(quad.bottom_right(), Point2D::new(836.0, 754.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
