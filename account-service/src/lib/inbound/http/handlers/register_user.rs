use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldErrors;
use super::UserData;
use crate::inbound::http::router::AppState;
use crate::principal::models::EmailAddress;
use crate::principal::models::FullName;
use crate::principal::models::Password;
use crate::principal::models::PrincipalKind;
use crate::user::models::RegisterUserCommand;

pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    let Json(body) = payload?;

    let user = state
        .user_service
        .register_user(body.try_into_command()?)
        .await?;

    let issued = state.session_service.issue(&user.id, PrincipalKind::User)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterUserResponseData {
            user: (&user).into(),
            token: issued.token,
        },
    ))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterUserRequest {
    fullname: FullNameRequest,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FullNameRequest {
    pub firstname: String,
    pub lastname: Option<String>,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let mut errors = FieldErrors::new();
        let full_name = errors.check_name(FullName::new(
            self.fullname.firstname,
            self.fullname.lastname,
        ));
        let email = errors.check("email", EmailAddress::new(self.email));
        let password = errors.check("password", Password::new(self.password));

        match (full_name, email, password) {
            (Some(full_name), Some(email), Some(password)) => {
                Ok(RegisterUserCommand::new(full_name, email, password))
            }
            _ => Err(errors.into_error()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub user: UserData,
    pub token: String,
}
