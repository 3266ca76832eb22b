// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preprocessing — downsample the source photo to a working resolution and
// produce the smoothed single-channel image the edge detector consumes.

use docuscan_core::ScaleRatio;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use imageproc::filter::gaussian_blur_f32;
use tracing::{debug, instrument};

/// Downsample the source image to a fixed working height, preserving aspect
/// ratio, and record the ratio needed to map working-resolution coordinates
/// back to the original. The original image is left untouched; the rectifier
/// resamples it at full resolution later.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn downscale(image: &DynamicImage, working_height: u32) -> (DynamicImage, ScaleRatio) {
    let ratio = image.height() as f32 / working_height as f32;
    let working_width = ((image.width() as f32 / ratio).round() as u32).max(1);
    let working = image.resize_exact(working_width, working_height, FilterType::Lanczos3);
    debug!(working_width, working_height, ratio, "working copy created");
    (working, ScaleRatio(ratio))
}

/// Grayscale conversion followed by Gaussian smoothing. `sigma` must be
/// positive; 1.1 corresponds to a 5x5 kernel with automatically derived sigma.
pub fn smooth(image: &DynamicImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(&image.to_luma8(), sigma)
}
