// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Tuning parameters for the scan pipeline.
///
/// Every stage constant is overridable; the defaults are the values the
/// pipeline was tuned with. Unknown or missing fields in a serialized config
/// fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Height of the downsampled working copy in pixels. Contour detection
    /// runs at this resolution; results are mapped back to full resolution.
    pub working_height: u32,
    /// Sigma of the Gaussian smoothing applied before edge detection.
    /// 1.1 is the sigma a 5x5 kernel implies when derived automatically
    /// from kernel size. Must be positive.
    pub blur_sigma: f32,
    /// Canny low threshold, in the same intensity units as the input.
    pub canny_low: f32,
    /// Canny high threshold.
    pub canny_high: f32,
    /// How many of the largest contours to consider as document candidates.
    pub max_candidates: usize,
    /// Polygon simplification tolerance, as a fraction of contour perimeter.
    pub approx_epsilon_ratio: f64,
    /// Radius of the adaptive-threshold neighbourhood in pixels.
    pub threshold_block_radius: u32,
    /// Constant subtracted from the local weighted mean before comparison.
    pub threshold_offset: i32,
    /// Height of the final output image in pixels (aspect preserved).
    pub display_height: u32,
}

impl ScanConfig {
    /// Reject parameter values the pipeline cannot run with.
    ///
    /// Config files are user-supplied, so a parseable file can still carry
    /// values that would panic deep inside the image primitives (a
    /// non-positive blur sigma, for one). Checked once, before any pixel
    /// work starts.
    pub fn validate(&self) -> Result<()> {
        if !(self.blur_sigma > 0.0 && self.blur_sigma.is_finite()) {
            return Err(ScanError::InvalidConfig {
                reason: format!("blur_sigma must be positive, got {}", self.blur_sigma),
            });
        }
        if self.working_height == 0 {
            return Err(ScanError::InvalidConfig {
                reason: "working_height must be at least 1".into(),
            });
        }
        if self.display_height == 0 {
            return Err(ScanError::InvalidConfig {
                reason: "display_height must be at least 1".into(),
            });
        }
        if self.threshold_block_radius == 0 {
            return Err(ScanError::InvalidConfig {
                reason: "threshold_block_radius must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            working_height: 800,
            blur_sigma: 1.1,
            canny_low: 75.0,
            canny_high: 200.0,
            max_candidates: 5,
            approx_epsilon_ratio: 0.02,
            threshold_block_radius: 11,
            threshold_offset: 10,
            display_height: 800,
        }
    }
}
