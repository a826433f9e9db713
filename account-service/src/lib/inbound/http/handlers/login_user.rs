use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldErrors;
use super::UserData;
use crate::inbound::http::middleware::session_cookie;
use crate::inbound::http::router::AppState;
use crate::principal::models::EmailAddress;
use crate::principal::models::LoginCommand;
use crate::principal::models::Password;
use crate::principal::models::PrincipalKind;

pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<LoginUserResponseData>), ApiError> {
    let Json(body) = payload?;

    let user = state
        .user_service
        .authenticate_user(body.try_into_command()?)
        .await?;

    let issued = state.session_service.issue(&user.id, PrincipalKind::User)?;
    let jar = jar.add(session_cookie(issued.token.clone(), state.cookie_secure));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            LoginUserResponseData {
                user: (&user).into(),
                token: issued.token,
            },
        ),
    ))
}

/// Login body shared by users and captains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

impl LoginRequestBody {
    pub(super) fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let mut errors = FieldErrors::new();
        let email = errors.check("email", EmailAddress::new(self.email));
        let password = errors.check("password", Password::new(self.password));

        match (email, password) {
            (Some(email), Some(password)) => Ok(LoginCommand { email, password }),
            _ => Err(errors.into_error()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserResponseData {
    pub user: UserData,
    pub token: String,
}
