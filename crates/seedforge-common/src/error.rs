//! Common error types used throughout seedforge.
//!
//! The naming and tagging engine itself never fails; these errors cover the
//! edges around it such as reading files or parsing vocabulary values.

/// Common error type for seedforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A vocabulary value could not be parsed.
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new UnknownValue error.
    pub fn unknown<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
