use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::register_user::FullNameRequest;
use super::ApiError;
use super::ApiSuccess;
use super::CaptainData;
use super::FieldErrors;
use crate::captain::models::PlateNumber;
use crate::captain::models::RegisterCaptainCommand;
use crate::captain::models::SeatCapacity;
use crate::captain::models::Vehicle;
use crate::captain::models::VehicleColor;
use crate::captain::models::VehicleType;
use crate::inbound::http::router::AppState;
use crate::principal::models::EmailAddress;
use crate::principal::models::FullName;
use crate::principal::models::Password;
use crate::principal::models::PrincipalKind;

pub async fn register_captain(
    State(state): State<AppState>,
    payload: Result<Json<RegisterCaptainRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterCaptainResponseData>, ApiError> {
    let Json(body) = payload?;

    let captain = state
        .captain_service
        .register_captain(body.try_into_command()?)
        .await?;

    let issued = state
        .session_service
        .issue(&captain.id, PrincipalKind::Captain)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterCaptainResponseData {
            captain: (&captain).into(),
            token: issued.token,
        },
    ))
}

/// HTTP request body for registering a captain (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterCaptainRequest {
    fullname: FullNameRequest,
    email: String,
    password: String,
    vehicle: VehicleRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VehicleRequest {
    color: String,
    plate: String,
    capacity: i64,
    #[serde(rename = "vehicleType")]
    vehicle_type: String,
}

impl RegisterCaptainRequest {
    fn try_into_command(self) -> Result<RegisterCaptainCommand, ApiError> {
        let mut errors = FieldErrors::new();
        let full_name = errors.check_name(FullName::new(
            self.fullname.firstname,
            self.fullname.lastname,
        ));
        let email = errors.check("email", EmailAddress::new(self.email));
        let password = errors.check("password", Password::new(self.password));
        let color = errors.check("vehicle.color", VehicleColor::new(self.vehicle.color));
        let plate = errors.check("vehicle.plate", PlateNumber::new(self.vehicle.plate));
        let capacity = errors.check(
            "vehicle.capacity",
            SeatCapacity::new(self.vehicle.capacity),
        );
        let vehicle_type = errors.check(
            "vehicle.vehicleType",
            VehicleType::from_str(&self.vehicle.vehicle_type),
        );

        match (full_name, email, password, color, plate, capacity, vehicle_type) {
            (
                Some(full_name),
                Some(email),
                Some(password),
                Some(color),
                Some(plate),
                Some(capacity),
                Some(vehicle_type),
            ) => Ok(RegisterCaptainCommand {
                full_name,
                email,
                password,
                vehicle: Vehicle {
                    color,
                    plate,
                    capacity,
                    vehicle_type,
                },
            }),
            _ => Err(errors.into_error()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterCaptainResponseData {
    pub captain: CaptainData,
    pub token: String,
}
