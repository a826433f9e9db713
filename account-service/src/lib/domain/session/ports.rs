use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::principal::models::PrincipalId;
use crate::principal::models::PrincipalKind;
use crate::session::errors::SessionError;
use crate::session::models::IssuedToken;
use crate::session::models::RevocationEntry;
use crate::session::models::VerifiedSession;

/// Port for token issuance, verification and revocation.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Sign a token for `principal_id`, bound to `kind`.
    ///
    /// # Errors
    /// * `Issue` - Signing failed
    fn issue(&self, principal_id: &PrincipalId, kind: PrincipalKind)
        -> Result<IssuedToken, SessionError>;

    /// Check signature, shape and expiry. Does not consult the revocation list.
    ///
    /// # Errors
    /// * `Expired` - Expiry has passed
    /// * `InvalidSignature` - Not signed with this service's secret
    /// * `Malformed` - Not a session token
    fn verify(&self, token: &str) -> Result<VerifiedSession, SessionError>;

    /// Add a genuine `token` to the revocation list. Revoking twice is not an
    /// error, and an expired token is accepted without being recorded.
    ///
    /// # Errors
    /// * `InvalidSignature` / `Malformed` - Not a token this service issued
    /// * `Store` - Revocation list unavailable
    async fn revoke(&self, token: &str) -> Result<(), SessionError>;

    /// Whether `token` has been revoked.
    ///
    /// # Errors
    /// * `Store` - Revocation list unavailable
    async fn is_revoked(&self, token: &str) -> Result<bool, SessionError>;

    /// Drop revocation entries whose tokens have expired on their own.
    ///
    /// # Returns
    /// Number of entries removed
    async fn purge_expired(&self) -> Result<u64, SessionError>;
}

/// Persistence for the revocation list.
#[async_trait]
pub trait RevocationRepository: Send + Sync + 'static {
    /// Insert an entry; an existing entry for the same token is left untouched.
    async fn insert(&self, entry: RevocationEntry) -> Result<(), SessionError>;

    /// Whether an entry exists for `token`.
    async fn contains(&self, token: &str) -> Result<bool, SessionError>;

    /// Delete entries with `expires_at` before `now`.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, SessionError>;
}

/// Capability the auth middleware needs to turn a verified token into a
/// principal: which kind of token it accepts, and how to look the id up.
#[async_trait]
pub trait PrincipalResolver: Send + Sync + 'static {
    type Principal: Clone + Send + Sync + 'static;

    fn kind(&self) -> PrincipalKind;

    async fn resolve(&self, id: &PrincipalId) -> Result<Option<Self::Principal>, SessionError>;
}
