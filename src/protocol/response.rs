//! Response definitions
//!
//! Represents responses to clients.

/// A single-line reply sent back to the peer.
///
/// Both variants carry a human-readable detail string, not a structured
/// code; the peer consumes the line immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The operation succeeded
    Success(String),

    /// The operation was rejected or failed
    Error(String),
}

impl Response {
    /// Create a success response
    pub fn success(detail: impl Into<String>) -> Self {
        Response::Success(detail.into())
    }

    /// Create an error response
    pub fn error(detail: impl Into<String>) -> Self {
        Response::Error(detail.into())
    }

    /// Whether this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }
}
