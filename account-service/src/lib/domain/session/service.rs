use std::sync::Arc;

use async_trait::async_trait;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;

use crate::principal::models::PrincipalId;
use crate::principal::models::PrincipalKind;
use crate::session::errors::SessionError;
use crate::session::models::IssuedToken;
use crate::session::models::RevocationEntry;
use crate::session::models::SessionClaims;
use crate::session::models::SessionScope;
use crate::session::models::VerifiedSession;
use crate::session::ports::RevocationRepository;
use crate::session::ports::SessionServicePort;

/// Domain service for session tokens.
///
/// Tokens are self-contained: verification needs only the secret. The
/// revocation list is what lets a still-valid token be forgotten on logout.
pub struct SessionService<RR>
where
    RR: RevocationRepository,
{
    revocations: Arc<RR>,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

impl<RR> SessionService<RR>
where
    RR: RevocationRepository,
{
    /// Create a session service.
    ///
    /// # Arguments
    /// * `revocations` - Revocation list persistence
    /// * `secret` - HS256 signing secret, used for both signing and verification
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(revocations: Arc<RR>, secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            revocations,
            jwt_handler: JwtHandler::new(secret),
            token_ttl,
        }
    }
}

#[async_trait]
impl<RR> SessionServicePort for SessionService<RR>
where
    RR: RevocationRepository,
{
    fn issue(
        &self,
        principal_id: &PrincipalId,
        kind: PrincipalKind,
    ) -> Result<IssuedToken, SessionError> {
        let claims = SessionClaims::issue(principal_id, self.token_ttl, SessionScope { kind });
        let token = self.jwt_handler.encode(&claims)?;

        tracing::debug!(
            principal_id = %principal_id,
            kind = %kind,
            expires_at = %claims.expires_at(),
            "Session token issued"
        );

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    fn verify(&self, token: &str) -> Result<VerifiedSession, SessionError> {
        let claims: SessionClaims = self.jwt_handler.decode(token)?;

        let principal_id = PrincipalId::from_string(&claims.sub)
            .map_err(|e| SessionError::Malformed(e.to_string()))?;

        Ok(VerifiedSession {
            principal_id,
            kind: claims.custom.kind,
            expires_at: claims.expires_at(),
        })
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        let expires_at = match self.verify(token) {
            Ok(session) => session.expires_at,
            Err(SessionError::Expired) => {
                // Already unusable; nothing to remember.
                tracing::debug!("Expired token presented for revocation");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let revoked_at = Utc::now();

        self.revocations
            .insert(RevocationEntry {
                token: token.to_string(),
                revoked_at,
                expires_at,
            })
            .await?;

        tracing::info!(expires_at = %expires_at, "Session token revoked");

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, SessionError> {
        self.revocations.contains(token).await
    }

    async fn purge_expired(&self) -> Result<u64, SessionError> {
        let purged = self.revocations.delete_expired(Utc::now()).await?;

        if purged > 0 {
            tracing::info!(purged, "Expired revocation entries purged");
        }

        Ok(purged)
    }
}
