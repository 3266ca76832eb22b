// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Docuscan — Core types, configuration, and error definitions shared across crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use human_errors::{HumanError, Severity, humanize_error};
pub use types::*;
