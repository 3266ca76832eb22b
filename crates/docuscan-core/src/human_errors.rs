// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages. Every technical error is mapped to plain
// English with a clear suggestion, so the presentation layer never shows a
// raw decoder or geometry message to the user.

use crate::error::ScanError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must do something (pick another file, retake the photo).
    ActionRequired,
    /// Cannot be fixed by user action on this input.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in a UI).
    pub severity: Severity,
}

/// Convert a `ScanError` into a `HumanError`.
pub fn humanize_error(err: &ScanError) -> HumanError {
    match err {
        ScanError::ImageLoad { path, .. } => HumanError {
            message: format!("We couldn't open {}.", path.display()),
            suggestion: "Check that the file exists and is a JPEG or PNG photo.".into(),
            severity: Severity::ActionRequired,
        },

        ScanError::NoDocumentFound { .. } => HumanError {
            message: "We couldn't find a document in that photo.".into(),
            suggestion: "Retake the photo so all four edges of the page are visible, \
                         with some contrast against the background."
                .into(),
            severity: Severity::ActionRequired,
        },

        ScanError::DegenerateGeometry { .. } => HumanError {
            message: "The detected page outline was too distorted to flatten.".into(),
            suggestion: "Retake the photo from more directly above the document.".into(),
            severity: Severity::ActionRequired,
        },

        ScanError::ImageWrite { path, .. } => HumanError {
            message: format!("We couldn't save the scan to {}.", path.display()),
            suggestion: "Check that the folder exists and that you have permission \
                         to write to it."
                .into(),
            severity: Severity::ActionRequired,
        },

        ScanError::InvalidConfig { reason } => HumanError {
            message: "A scan setting is out of range.".into(),
            suggestion: format!("Adjust the configuration file: {reason}."),
            severity: Severity::ActionRequired,
        },

        ScanError::Io(detail) => HumanError {
            message: "A file couldn't be read.".into(),
            suggestion: format!("Details: {detail}"),
            severity: Severity::ActionRequired,
        },

        ScanError::Config(detail) => HumanError {
            message: "The configuration file couldn't be understood.".into(),
            suggestion: format!("Fix the JSON and try again. Details: {detail}"),
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_document_suggests_retaking_the_photo() {
        let human = humanize_error(&ScanError::NoDocumentFound { candidates: 5 });
        assert!(human.suggestion.contains("Retake"));
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn write_error_names_the_destination() {
        let human = humanize_error(&ScanError::ImageWrite {
            path: PathBuf::from("/readonly/out.png"),
            reason: "permission denied".into(),
        });
        assert!(human.message.contains("/readonly/out.png"));
    }
}
