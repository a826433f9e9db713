use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::expired_session_cookie;
use crate::inbound::http::middleware::extract_token;
use crate::inbound::http::router::AppState;

/// Revokes the presented token and clears the session cookie.
///
/// Serves both principal kinds. It is not gated by the authentication
/// middleware, so repeating a logout with an already revoked token succeeds.
/// Strings this service did not sign are refused without touching the store.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<MessageData>), ApiError> {
    let token = extract_token(&headers).ok_or_else(|| {
        tracing::debug!("Logout without a session token");
        ApiError::Unauthorized
    })?;

    state.session_service.revoke(&token).await?;

    Ok((
        jar.remove(expired_session_cookie()),
        ApiSuccess::new(
            StatusCode::OK,
            MessageData {
                message: "Logged out successfully".to_string(),
            },
        ),
    ))
}
