// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge detection — binary edge map from the smoothed intensity image.

use image::GrayImage;
use imageproc::edges::canny;

/// Dual-threshold (Canny) edge detection. Deterministic for identical input;
/// output pixels are strictly 0 or 255.
pub fn detect(smoothed: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(smoothed, low_threshold, high_threshold)
}
