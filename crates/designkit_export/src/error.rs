//! Export error types

use thiserror::Error;

/// Errors raised while selecting or running a codec
#[derive(Error, Debug)]
pub enum ExportError {
    /// Format id is not one of [`crate::ExportFormat::ALL`]
    #[error("unknown export format `{format}`; known formats: {known}")]
    UnknownFormat { format: String, known: String },

    /// The JSON codec failed to serialize the config
    #[error("failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn unknown_format(format: &str) -> Self {
        ExportError::UnknownFormat {
            format: format.to_string(),
            known: crate::ExportFormat::known_ids(),
        }
    }
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
