// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Post-processing — collapse the rectified page to a high-contrast binary
// image with a locally adaptive threshold, then resize for display.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};
use tracing::{debug, instrument};

/// Binarize with a Gaussian-weighted local threshold.
///
/// Each pixel is compared against the Gaussian-weighted mean of its
/// neighbourhood (a window of `2 * block_radius + 1` pixels a side) minus
/// `offset`. Pixels above the shifted mean become white, the rest black,
/// which keeps ink dark under uneven lighting where a single global
/// threshold would not.
#[instrument(skip(rectified), fields(width = rectified.width(), height = rectified.height()))]
pub fn adaptive_threshold(rectified: &RgbImage, block_radius: u32, offset: i32) -> GrayImage {
    let gray = imageops::grayscale(rectified);
    // Sigma chosen so the window covers roughly three standard deviations.
    let sigma = (block_radius as f32) / 3.0;
    let local_mean = imageproc::filter::gaussian_blur_f32(&gray, sigma);
    debug!(block_radius, offset, sigma, "thresholding against local mean");

    let mut binary = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in binary.enumerate_pixels_mut() {
        let value = gray.get_pixel(x, y).0[0] as i32;
        let mean = local_mean.get_pixel(x, y).0[0] as i32;
        pixel.0[0] = if value > mean - offset { 255 } else { 0 };
    }
    binary
}

/// Shrink (or grow) to `display_height` rows, preserving aspect ratio.
///
/// Nearest-neighbour sampling keeps the output strictly two-valued; any
/// interpolating filter would reintroduce gray at the ink boundaries.
pub fn resize_for_display(binary: &GrayImage, display_height: u32) -> GrayImage {
    let ratio = binary.height() as f32 / display_height as f32;
    let display_width = ((binary.width() as f32 / ratio).round() as u32).max(1);
    imageops::resize(binary, display_width, display_height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn output_is_strictly_two_valued() {
        let mut page = RgbImage::new(64, 64);
        for (x, y, pixel) in page.enumerate_pixels_mut() {
            // Diagonal gradient with a dark glyph block in the middle.
            let base = ((x + y) * 2).min(255) as u8;
            *pixel = if (28..36).contains(&x) && (28..36).contains(&y) {
                Rgb([10, 10, 10])
            } else {
                Rgb([base, base, base])
            };
        }

        let binary = adaptive_threshold(&page, 11, 10);
        assert!(binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn dark_ink_on_a_bright_page_stays_dark() {
        let mut page = RgbImage::from_pixel(64, 64, Rgb([220, 220, 220]));
        for y in 30..34 {
            for x in 10..54 {
                page.put_pixel(x, y, Rgb([15, 15, 15]));
            }
        }

        let binary = adaptive_threshold(&page, 11, 10);
        assert_eq!(binary.get_pixel(32, 32).0[0], 0);
        assert_eq!(binary.get_pixel(32, 5).0[0], 255);
        assert_eq!(binary.get_pixel(5, 58).0[0], 255);
    }

    /// Ink strokes and background must classify correctly in well over 99%
    /// of pixels, excluding only the transition zone around each stroke
    /// (one block radius, where the local mean is genuinely mixed).
    #[test]
    fn classification_is_accurate_outside_the_transition_zone() {
        let mut page = RgbImage::from_pixel(200, 200, Rgb([220, 220, 220]));
        let strokes = [40u32, 80, 120, 160];
        for &row in &strokes {
            for y in row..row + 3 {
                for x in 20..180 {
                    page.put_pixel(x, y, Rgb([15, 15, 15]));
                }
            }
        }

        let binary = adaptive_threshold(&page, 11, 10);

        let near_a_stroke = |y: u32| {
            strokes
                .iter()
                .any(|&row| y + 11 >= row && y <= row + 3 + 11)
        };
        let mut tested = 0usize;
        let mut correct = 0usize;
        for (x, y, pixel) in binary.enumerate_pixels() {
            let on_stroke = strokes.iter().any(|&row| (row..row + 3).contains(&y))
                && (20..180).contains(&x);
            if on_stroke {
                tested += 1;
                correct += usize::from(pixel.0[0] == 0);
            } else if !near_a_stroke(y) {
                tested += 1;
                correct += usize::from(pixel.0[0] == 255);
            }
        }
        assert!(
            correct as f64 / tested as f64 > 0.99,
            "classified {correct}/{tested} correctly"
        );
    }

    #[test]
    fn uniform_page_thresholds_white() {
        // The local mean equals the pixel value everywhere, so the offset
        // alone decides: value > mean - offset holds for any positive offset.
        let page = RgbImage::from_pixel(32, 32, Rgb([128, 128, 128]));
        let binary = adaptive_threshold(&page, 11, 10);
        assert!(binary.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn display_resize_preserves_aspect_ratio_and_values() {
        let mut binary = GrayImage::from_pixel(400, 1600, image::Luma([255]));
        for y in 0..1600 {
            for x in 0..200 {
                binary.put_pixel(x, y, image::Luma([0]));
            }
        }

        let display = resize_for_display(&binary, 800);
        assert_eq!(display.dimensions(), (200, 800));
        assert!(display.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn display_resize_never_collapses_width_to_zero() {
        let binary = GrayImage::from_pixel(1, 4000, image::Luma([255]));
        let display = resize_for_display(&binary, 800);
        assert_eq!(display.dimensions(), (1, 800));
    }
}
