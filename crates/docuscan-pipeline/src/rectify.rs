// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Perspective rectification — map the detected quadrilateral onto an
// axis-aligned rectangle by estimating a homography from the four corner
// correspondences and warping the full-resolution original through it.

use docuscan_core::{OrderedQuad, Result, ScanError};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use tracing::{debug, instrument};

/// Warp `image` so that `quad` becomes the full output frame.
///
/// The corners must already be expressed in the coordinate space of `image`;
/// scale them back up with [`OrderedQuad::scale`] before calling this when
/// detection ran on a downscaled copy. Output width is the longer of the two
/// horizontal edges, output height the longer of the two vertical edges,
/// both truncated to whole pixels.
#[instrument(skip(image, quad), fields(width = image.width(), height = image.height()))]
pub fn four_point_transform(image: &DynamicImage, quad: &OrderedQuad) -> Result<RgbImage> {
    let tl = quad.top_left();
    let tr = quad.top_right();
    let br = quad.bottom_right();
    let bl = quad.bottom_left();

    let out_width = br.distance(&bl).max(tr.distance(&tl)) as u32;
    let out_height = tr.distance(&br).max(tl.distance(&bl)) as u32;
    if out_width == 0 || out_height == 0 {
        return Err(ScanError::DegenerateGeometry {
            width: out_width,
            height: out_height,
        });
    }
    debug!(out_width, out_height, "rectified extent");

    let from = [
        (tl.x, tl.y),
        (tr.x, tr.y),
        (br.x, br.y),
        (bl.x, bl.y),
    ];
    let to = [
        (0.0, 0.0),
        ((out_width - 1) as f32, 0.0),
        ((out_width - 1) as f32, (out_height - 1) as f32),
        (0.0, (out_height - 1) as f32),
    ];
    let projection =
        Projection::from_control_points(from, to).ok_or(ScanError::DegenerateGeometry {
            width: out_width,
            height: out_height,
        })?;

    let source = image.to_rgb8();
    let mut rectified = RgbImage::new(out_width, out_height);
    warp_into(
        &source,
        &projection,
        Interpolation::Bilinear,
        Rgb([255, 255, 255]),
        &mut rectified,
    );
    Ok(rectified)
}
