use auth::JwtError;
use thiserror::Error;

use crate::principal::models::PrincipalKind;

/// Errors raised while issuing, checking or revoking session tokens.
///
/// Every variant except `Issue` and `Store` means "not authorized"; the
/// variants only exist so the cause can be logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token was revoked")]
    Revoked,

    #[error("Token issued for {actual}, expected {expected}")]
    KindMismatch {
        expected: PrincipalKind,
        actual: PrincipalKind,
    },

    #[error("Principal {0} no longer exists")]
    PrincipalNotFound(String),

    #[error("Token could not be issued: {0}")]
    Issue(String),

    #[error("Session store error: {0}")]
    Store(String),
}

impl SessionError {
    /// Infrastructure failures, as opposed to a rejected credential.
    pub fn is_internal(&self) -> bool {
        matches!(self, SessionError::Issue(_) | SessionError::Store(_))
    }
}

impl From<JwtError> for SessionError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => SessionError::Expired,
            JwtError::InvalidSignature => SessionError::InvalidSignature,
            JwtError::Malformed(msg) => SessionError::Malformed(msg),
            JwtError::EncodingFailed(msg) => SessionError::Issue(msg),
        }
    }
}
