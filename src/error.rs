//! Error types for rconsole.
//!
//! All errors are represented by [`RconError`]. The first five variants form
//! the closed, user-presentable taxonomy a caller can match on and render;
//! [`RconError::Io`] carries anything the runner could not classify and is
//! treated as fatal by the binary rather than shown as a friendly message.

use thiserror::Error;

/// All possible errors that can occur in rconsole.
#[derive(Error, Debug)]
pub enum RconError {
    /// A raw parameter failed validation. Carries the specific message.
    #[error("{0}")]
    InvalidInput(String),

    /// The remote host actively refused the connection.
    #[error("Connection refused.")]
    ConnectionRefused,

    /// No response within the transport deadline.
    #[error("Connection timed out.")]
    Timeout,

    /// The response correlation id does not match the request id.
    #[error("Request ID mismatch.")]
    RequestIdMismatch,

    /// The server rejected the password during authentication.
    #[error("Invalid password.")]
    WrongPassword,

    /// Any transport fault the runner could not classify. Fatal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RconError {
    /// Whether this error belongs to the closed user-presentable taxonomy.
    ///
    /// `false` means a programming or environment error that must be
    /// surfaced verbatim instead of rendered as a one-line message.
    pub fn is_categorized(&self) -> bool {
        !matches!(self, RconError::Io(_))
    }
}

/// Convenient Result type alias for rconsole operations.
pub type Result<T> = std::result::Result<T, RconError>;
