//! Error types for the Trackside console.
//!
//! This module defines the centralized error type [`TracksideError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// Message shown to the user for every failure that is not an HTTP status.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// The main error type for Trackside operations.
///
/// The gateway raises [`TracksideError::Http`] for every non-2xx response. Transport
/// and decode failures are kept as separate variants but surface to the user as
/// the same "unexpected error" message (see [`TracksideError::user_message`]).
///
/// # Examples
///
/// ```
/// use trackside::domain::TracksideError;
///
/// let err = TracksideError::Http { status: 404, message: "The resource was not found.".into() };
/// assert_eq!(err.status(), Some(404));
/// assert_eq!(err.user_message(), "The resource was not found.");
/// ```
#[derive(Debug, Error)]
pub enum TracksideError {
    /// The API answered with a non-2xx status.
    ///
    /// `message` is already mapped to the user-facing text for the status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A payload did not match the expected entity shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A shell command or form value was rejected.
    #[error("{0}")]
    InvalidInput(String),
}

impl TracksideError {
    /// Builds an [`TracksideError::InvalidInput`] from anything printable.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns the HTTP status for gateway failures, `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the text shown in a notification for this error.
    ///
    /// HTTP failures keep their mapped message, input errors keep their own text,
    /// everything else collapses to [`UNEXPECTED_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } | Self::InvalidInput(message) => message.clone(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

/// A specialized `Result` type for Trackside operations.
pub type Result<T> = std::result::Result<T, TracksideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_keep_status_and_message() {
        let err = TracksideError::Http {
            status: 400,
            message: "bad".to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "bad");
    }

    #[test]
    fn decode_errors_have_no_status_and_generic_message() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = TracksideError::from(decode);
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
