use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures keep their cause so callers can log it, even when they
/// report every variant to the client the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,
}
