//! Error types for KEGG record ingestion

use thiserror::Error;

use crate::types::ParsedRecord;

/// Result type alias for KEGG operations
pub type Result<T> = std::result::Result<T, KeggError>;

/// Main error type for KEGG parsing and retrieval
#[derive(Error, Debug)]
pub enum KeggError {
    /// A field name that the record kind does not recognize
    #[error("Unknown field {field} in {}: {line:?}", entry.as_deref().unwrap_or("<no ENTRY>"))]
    UnknownField {
        field: String,
        line: String,
        entry: Option<String>,
        /// Record as built up to the offending line
        partial: Box<ParsedRecord>,
    },

    #[error("Equation does not have two parts in {}: {body:?}", entry.as_deref().unwrap_or("<no ENTRY>"))]
    MalformedEquation { entry: Option<String>, body: String },

    /// A known field whose body does not fit its rule
    #[error("Malformed {field} line ({reason}): {line:?}")]
    MalformedLine {
        field: String,
        line: String,
        reason: &'static str,
    },

    #[error("Record has no ENTRY field: {raw_preview:?}")]
    MissingEntry { raw_preview: String },

    /// Non-200 response from the remote endpoint
    #[error("Bad response from {url}: {status}")]
    Transport { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KeggError {
    /// Whether the error came from interpreting record text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            KeggError::UnknownField { .. }
                | KeggError::MalformedEquation { .. }
                | KeggError::MalformedLine { .. }
                | KeggError::MissingEntry { .. }
        )
    }

    /// Whether the error came from talking to the remote endpoint
    pub fn is_transport_error(&self) -> bool {
        matches!(self, KeggError::Transport { .. } | KeggError::Http(_))
    }
}
