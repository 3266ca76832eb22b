// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline orchestration — run the five stages in order on a single image
// and hand the result back without writing, so a caller can display the
// scan before deciding to persist it.

use std::path::{Path, PathBuf};

use docuscan_core::{OrderedQuad, Result, ScanConfig, ScanError};
use image::{GrayImage, RgbImage};
use tracing::{debug, info, instrument};

use crate::{binarize, contour, edges, preprocess, rectify};

// -- Scanner ------------------------------------------------------------

/// Runs the full scan pipeline: downscale, blur, edge detection, contour
/// selection, perspective rectification, adaptive binarization.
#[derive(Debug, Clone, Default)]
pub struct DocumentScanner {
    config: ScanConfig,
}

impl DocumentScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan the image at `path`.
    ///
    /// Nothing is written to disk; call [`ScannedDocument::save`] on the
    /// result to persist it next to the input.
    #[instrument(skip(self))]
    pub fn scan_file(&self, path: &Path) -> Result<ScannedDocument> {
        self.config.validate()?;

        let original = image::open(path).map_err(|e| ScanError::ImageLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(
            width = original.width(),
            height = original.height(),
            "image loaded"
        );

        let (working, ratio) = preprocess::downscale(&original, self.config.working_height);
        let smoothed = preprocess::smooth(&working, self.config.blur_sigma);
        let edge_map = edges::detect(&smoothed, self.config.canny_low, self.config.canny_high);

        let corners = contour::select_document_quad(
            &edge_map,
            self.config.max_candidates,
            self.config.approx_epsilon_ratio,
        )?;
        let working_quad = OrderedQuad::from_points(corners);
        debug!(?working_quad, "document boundary located");

        let mut outline = working.to_rgb8();
        contour::draw_quad_outline(&mut outline, &working_quad);

        let full_quad = working_quad.scale(ratio);
        let rectified = rectify::four_point_transform(&original, &full_quad)?;
        info!(
            width = rectified.width(),
            height = rectified.height(),
            "page rectified"
        );

        let binary = binarize::adaptive_threshold(
            &rectified,
            self.config.threshold_block_radius,
            self.config.threshold_offset,
        );
        let display = binarize::resize_for_display(&binary, self.config.display_height);

        Ok(ScannedDocument {
            image: display,
            outline,
            quad: full_quad,
            output_path: output_path_for(path),
        })
    }
}

// -- Result -------------------------------------------------------------

/// A finished scan, held in memory until the caller persists it.
#[derive(Debug, Clone)]
pub struct ScannedDocument {
    image: GrayImage,
    outline: RgbImage,
    quad: OrderedQuad,
    output_path: PathBuf,
}

impl ScannedDocument {
    /// The binarized, display-sized page.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// The working-resolution input with the detected boundary drawn on it.
    pub fn outline(&self) -> &RgbImage {
        &self.outline
    }

    /// Detected page corners in full-resolution coordinates.
    pub fn quad(&self) -> &OrderedQuad {
        &self.quad
    }

    /// Where [`save`](Self::save) will write: `<stem>_scanned.<ext>` next
    /// to the input.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write the scan to its derived output path.
    #[instrument(skip(self), fields(path = %self.output_path.display()))]
    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(&self.output_path)?;
        Ok(self.output_path.clone())
    }

    /// Write the scan to an explicit path instead.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.image.save(path).map_err(|e| ScanError::ImageWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "scan written");
        Ok(())
    }

    /// Write the boundary overlay for inspection.
    pub fn save_outline(&self, path: &Path) -> Result<()> {
        self.outline.save(path).map_err(|e| ScanError::ImageWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Derive the output filename: `page.jpg` becomes `page_scanned.jpg`.
/// Extension-less inputs fall back to PNG.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scan".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    input.with_file_name(format!("{stem}_scanned.{ext}"))
}
