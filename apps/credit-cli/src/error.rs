//! CLI error type

use thiserror::Error;

use credit_core::CreditError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Credit(#[from] CreditError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {0}: output file must end in .json or .xml")]
    UnsupportedOutput(String),

    #[error("Cannot edit initials in {0}: JATS files store names only, initials are derived on load")]
    DerivedInitials(String),

    #[error("Row {0} is out of range")]
    RowOutOfRange(u64),
}
