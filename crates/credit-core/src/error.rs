//! Error types for credit-core

use thiserror::Error;

/// Result type alias for credit-core operations
pub type Result<T> = std::result::Result<T, CreditError>;

/// Main error type for credit-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum CreditError {
    /// An uploaded file could not be decoded
    #[error("There was an error processing the file {filename}: {message}")]
    Parse { filename: String, message: String },

    /// An edit referenced a row that does not exist
    #[error("Row index {index} out of range for table with {len} rows")]
    Index { index: usize, len: usize },

    /// Serializing the table failed
    #[error("Export error: {0}")]
    Export(String),
}

impl CreditError {
    pub(crate) fn parse(filename: &str, message: impl Into<String>) -> Self {
        CreditError::Parse {
            filename: filename.to_string(),
            message: message.into(),
        }
    }
}
