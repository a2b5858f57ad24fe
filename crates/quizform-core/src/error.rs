//! Template persistence error types.
//!
//! Building a template never fails. These errors cover reading and writing
//! stored templates, where callers need to tell a missing file apart from a
//! malformed one.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving a template file.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read template from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid template document.
    #[error("invalid template JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The template could not be serialized.
    #[error("failed to serialize template")]
    Serialize(#[source] serde_json::Error),

    /// The template could not be written to disk.
    #[error("failed to write template to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TemplateError {
    /// Returns `true` if the file exists but its contents are unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, TemplateError::Parse { .. })
    }
}
