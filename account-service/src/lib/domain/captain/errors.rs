use thiserror::Error;

use crate::principal::errors::EmailError;
use crate::principal::errors::NameError;

/// Error for Vehicle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("Color must be at least {min} characters long")]
    ColorTooShort { min: usize },

    #[error("Plate must be at least {min} characters long")]
    PlateTooShort { min: usize },

    #[error("Capacity must be between {min} and {max}")]
    CapacityOutOfRange { min: i64, max: i64 },

    #[error("Invalid vehicle type: {0} (expected car, motorcycle or auto)")]
    UnsupportedType(String),
}

/// Error for CaptainStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown captain status: {0}")]
pub struct CaptainStatusError(pub String);

/// Top-level error for all captain-related operations
#[derive(Debug, Clone, Error)]
pub enum CaptainError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(#[from] VehicleError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] CaptainStatusError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Captain already exists")]
    AlreadyExists(String),

    #[error("Vehicle plate already registered")]
    PlateAlreadyRegistered(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
