//! Error types for cgidec

use thiserror::Error;

/// Error types for the cgidec library.
#[derive(Debug, Error)]
pub enum Error {
    /// A CGI sub-field contained a character outside `[0-9a-fA-F]`.
    #[error("Invalid hex digit in {field}: {value:?}")]
    InvalidHexDigit {
        /// Which sub-field failed to parse ("TAC" or "Cell ID")
        field: &'static str,
        /// The offending slice
        value: String,
    },

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
