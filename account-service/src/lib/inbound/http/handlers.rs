use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::captain::errors::CaptainError;
use crate::captain::models::Captain;
use crate::captain::models::CaptainStatus;
use crate::captain::models::Location;
use crate::captain::models::VehicleType;
use crate::principal::errors::NameError;
use crate::principal::models::FullName;
use crate::session::errors::SessionError;
use crate::user::errors::UserError;
use crate::user::models::User;

pub mod get_captain_profile;
pub mod get_user_profile;
pub mod login_captain;
pub mod login_user;
pub mod logout;
pub mod register_captain;
pub mod register_user;

/// Body message of every 401 response, whatever the underlying cause.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized Access";

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const VALIDATION_MESSAGE: &str = "Validation failed";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Logged, then answered with a generic message.
    InternalServerError(String),
    BadRequest(String),
    Validation(Vec<FieldError>),
    Unauthorized,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, data) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::message(INTERNAL_ERROR_MESSAGE),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorData::message(msg)),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData {
                    message: VALIDATION_MESSAGE.to_string(),
                    errors,
                },
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorData::message(UNAUTHORIZED_MESSAGE),
            ),
        };

        (status, Json(ApiResponseBody::new(status, data))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::AlreadyExists(_) | UserError::InvalidCredentials => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::InvalidEmail(_) | UserError::InvalidName(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CaptainError> for ApiError {
    fn from(err: CaptainError) -> Self {
        match err {
            CaptainError::AlreadyExists(_)
            | CaptainError::PlateAlreadyRegistered(_)
            | CaptainError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            CaptainError::InvalidEmail(_)
            | CaptainError::InvalidName(_)
            | CaptainError::InvalidVehicle(_) => ApiError::BadRequest(err.to_string()),
            CaptainError::InvalidStatus(_)
            | CaptainError::Password(_)
            | CaptainError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        if err.is_internal() {
            ApiError::InternalServerError(err.to_string())
        } else {
            ApiError::Unauthorized
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiErrorData {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collects every field failure of a request body so they are reported together.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check<T, E: fmt::Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.0.push(FieldError {
                    field: field.to_string(),
                    message: err.to_string(),
                });
                None
            }
        }
    }

    /// Same as [`FieldErrors::check`], with the field named after the failing name part.
    pub fn check_name(&mut self, result: Result<FullName, NameError>) -> Option<FullName> {
        let field = match &result {
            Err(NameError::LastNameTooShort { .. }) => "fullname.lastname",
            _ => "fullname.firstname",
        };
        self.check(field, result)
    }

    pub fn into_error(self) -> ApiError {
        ApiError::Validation(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullNameData {
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl From<&FullName> for FullNameData {
    fn from(name: &FullName) -> Self {
        Self {
            firstname: name.first_name().to_string(),
            lastname: name.last_name().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub fullname: FullNameData,
    pub email: String,
    #[serde(rename = "socketId", skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            fullname: (&user.full_name).into(),
            email: user.email.as_str().to_string(),
            socket_id: user.socket_id.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleData {
    pub color: String,
    pub plate: String,
    pub capacity: i32,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: VehicleType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptainData {
    pub id: String,
    pub fullname: FullNameData,
    pub email: String,
    pub status: CaptainStatus,
    pub vehicle: VehicleData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "socketId", skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Captain> for CaptainData {
    fn from(captain: &Captain) -> Self {
        Self {
            id: captain.id.to_string(),
            fullname: (&captain.full_name).into(),
            email: captain.email.as_str().to_string(),
            status: captain.status,
            vehicle: VehicleData {
                color: captain.vehicle.color.as_str().to_string(),
                plate: captain.vehicle.plate.as_str().to_string(),
                capacity: captain.vehicle.capacity.get(),
                vehicle_type: captain.vehicle.vehicle_type,
            },
            location: captain.location,
            socket_id: captain.socket_id.clone(),
            created_at: captain.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}
