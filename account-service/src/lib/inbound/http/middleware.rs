use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use axum_extra::extract::CookieJar;

use super::handlers::ApiError;
use crate::session::errors::SessionError;
use crate::session::ports::PrincipalResolver;
use crate::session::ports::SessionServicePort;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Principal resolved by [`authenticate`], available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct Authenticated<P>(pub P);

/// State of one [`authenticate`] instance: the session service plus the
/// resolver for the principal kind the guarded routes accept.
pub struct AuthGate<P> {
    sessions: Arc<dyn SessionServicePort>,
    resolver: Arc<dyn PrincipalResolver<Principal = P>>,
}

impl<P> AuthGate<P> {
    pub fn new(
        sessions: Arc<dyn SessionServicePort>,
        resolver: Arc<dyn PrincipalResolver<Principal = P>>,
    ) -> Self {
        Self { sessions, resolver }
    }
}

impl<P> Clone for AuthGate<P> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            resolver: Arc::clone(&self.resolver),
        }
    }
}

/// Middleware that admits a request only when it carries a live, unrevoked
/// token issued for the gate's principal kind, and that principal still exists.
pub async fn authenticate<P>(
    State(gate): State<AuthGate<P>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    P: Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers()).ok_or_else(|| {
        tracing::debug!("Request carries no session token");
        ApiError::Unauthorized
    })?;

    if gate.sessions.is_revoked(&token).await.map_err(reject)? {
        return Err(reject(SessionError::Revoked));
    }

    let session = gate.sessions.verify(&token).map_err(reject)?;

    let expected = gate.resolver.kind();
    if session.kind != expected {
        return Err(reject(SessionError::KindMismatch {
            expected,
            actual: session.kind,
        }));
    }

    let principal = gate
        .resolver
        .resolve(&session.principal_id)
        .await
        .map_err(reject)?
        .ok_or_else(|| reject(SessionError::PrincipalNotFound(session.principal_id.to_string())))?;

    tracing::debug!(
        principal_id = %session.principal_id,
        kind = %session.kind,
        "Request authenticated"
    );

    req.extensions_mut().insert(Authenticated(principal));

    Ok(next.run(req).await)
}

fn reject(err: SessionError) -> ApiError {
    if !err.is_internal() {
        tracing::warn!(reason = %err, "Rejected session token");
    }
    ApiError::from(err)
}

/// Reads the session token, preferring the `token` cookie over an
/// `Authorization: Bearer` header.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(secure)
        .build()
}

/// Cookie matching [`session_cookie`]'s name and path, for removal.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, "")).path("/").build()
}
