// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// docuscan-pipeline — the scan pipeline proper.
//
// A photograph of a rectangular document goes in; a flattened, binarized
// "scan" comes out. Stages run synchronously, each consuming the previous
// stage's output: downscale/smooth → edge map → quad selection →
// perspective rectification → adaptive binarization.

pub mod binarize;
pub mod contour;
pub mod edges;
pub mod preprocess;
pub mod rectify;
pub mod scanner;

// Re-export the primary structs so callers can use `docuscan_pipeline::DocumentScanner`.
pub use scanner::{DocumentScanner, ScannedDocument};
