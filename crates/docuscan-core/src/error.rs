// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Docuscan. Every error is terminal for the current
// scan invocation — there is no automatic retry.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Docuscan operations.
#[derive(Debug, Error)]
pub enum ScanError {
    // -- Pipeline errors --
    #[error("failed to load image {}: {reason}", path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("no four-point document boundary among the {candidates} largest contours")]
    NoDocumentFound { candidates: usize },

    #[error("rectification target collapsed to {width}x{height}")]
    DegenerateGeometry { width: u32, height: u32 },

    #[error("failed to write scan to {}: {reason}", path.display())]
    ImageWrite { path: PathBuf, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // -- Configuration / I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanError>;
