use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::principal::models::PrincipalId;
use crate::principal::models::PrincipalKind;

/// Custom part of the session token: which kind of principal `sub` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScope {
    pub kind: PrincipalKind,
}

/// Claims carried by every session token.
pub type SessionClaims = auth::Claims<SessionScope>;

/// A freshly signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// What a token proves once its signature and expiry check out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedSession {
    pub principal_id: PrincipalId,
    pub kind: PrincipalKind,
    pub expires_at: DateTime<Utc>,
}

/// A token explicitly invalidated before its expiry.
///
/// Never updated. Safe to delete once `expires_at` has passed, because the
/// signature check alone rejects the token from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevocationEntry {
    pub token: String,
    pub revoked_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
