use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use super::login_user::LoginRequestBody;
use super::ApiError;
use super::ApiSuccess;
use super::CaptainData;
use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::router::AppState;
use crate::principal::models::PrincipalKind;

pub async fn login_captain(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<LoginCaptainResponseData>), ApiError> {
    let Json(body) = payload?;

    let captain = state
        .captain_service
        .authenticate_captain(body.try_into_command()?)
        .await?;

    let issued = state
        .session_service
        .issue(&captain.id, PrincipalKind::Captain)?;
    let jar = jar.add(session_cookie(issued.token.clone(), state.cookie_secure));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            LoginCaptainResponseData {
                captain: (&captain).into(),
                token: issued.token,
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCaptainResponseData {
    pub captain: CaptainData,
    pub token: String,
}
