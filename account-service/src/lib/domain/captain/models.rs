use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::captain::errors::CaptainStatusError;
use crate::captain::errors::VehicleError;
use crate::principal::models::EmailAddress;
use crate::principal::models::FullName;
use crate::principal::models::Password;
use crate::principal::models::PrincipalId;

/// Captain aggregate entity.
///
/// A registered driver with the vehicle they drive. Like `User`, it never
/// holds the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Captain {
    pub id: PrincipalId,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub status: CaptainStatus,
    pub vehicle: Vehicle,
    pub location: Option<Location>,
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Availability of a captain. New captains start inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptainStatus {
    Active,
    #[default]
    Inactive,
}

impl CaptainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptainStatus::Active => "active",
            CaptainStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for CaptainStatus {
    type Err = CaptainStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CaptainStatus::Active),
            "inactive" => Ok(CaptainStatus::Inactive),
            other => Err(CaptainStatusError(other.to_string())),
        }
    }
}

/// Last reported position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Vehicle registered to a captain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub color: VehicleColor,
    pub plate: PlateNumber,
    pub capacity: SeatCapacity,
    pub vehicle_type: VehicleType,
}

/// Vehicle color, at least 3 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleColor(String);

impl VehicleColor {
    const MIN_LENGTH: usize = 3;

    pub fn new(color: String) -> Result<Self, VehicleError> {
        let color = color.trim().to_string();
        if color.chars().count() < Self::MIN_LENGTH {
            return Err(VehicleError::ColorTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// License plate, at least 3 characters, stored upper-case so the unique
/// index treats `ab 123` and `AB 123` as the same plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateNumber(String);

impl PlateNumber {
    const MIN_LENGTH: usize = 3;

    pub fn new(plate: String) -> Result<Self, VehicleError> {
        let plate = plate.trim().to_uppercase();
        if plate.chars().count() < Self::MIN_LENGTH {
            return Err(VehicleError::PlateTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(plate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Passenger capacity, at least one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCapacity(i32);

impl SeatCapacity {
    const MIN: i64 = 1;
    const MAX: i64 = i32::MAX as i64;

    pub fn new(capacity: i64) -> Result<Self, VehicleError> {
        if !(Self::MIN..=Self::MAX).contains(&capacity) {
            return Err(VehicleError::CapacityOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(capacity as i32))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

/// Supported vehicle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Auto,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Auto => "auto",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(VehicleType::Car),
            "motorcycle" => Ok(VehicleType::Motorcycle),
            "auto" => Ok(VehicleType::Auto),
            other => Err(VehicleError::UnsupportedType(other.to_string())),
        }
    }
}

/// Command to register a new captain with domain types
#[derive(Debug)]
pub struct RegisterCaptainCommand {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password: Password,
    pub vehicle: Vehicle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_only_known_values() {
        assert_eq!("car".parse::<VehicleType>(), Ok(VehicleType::Car));
        assert_eq!("auto".parse::<VehicleType>(), Ok(VehicleType::Auto));
        assert_eq!(
            "truck".parse::<VehicleType>(),
            Err(VehicleError::UnsupportedType("truck".to_string()))
        );
        assert!("Car".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_plate_normalized() {
        let plate = PlateNumber::new(" ab 123 ".to_string()).unwrap();
        assert_eq!(plate.as_str(), "AB 123");
        assert_eq!(
            PlateNumber::new("ab".to_string()),
            Err(VehicleError::PlateTooShort { min: 3 })
        );
    }

    #[test]
    fn test_capacity_bounds() {
        assert_eq!(SeatCapacity::new(4).unwrap().get(), 4);
        assert!(SeatCapacity::new(0).is_err());
        assert!(SeatCapacity::new(i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn test_color_min_length() {
        assert!(VehicleColor::new("red".to_string()).is_ok());
        assert_eq!(
            VehicleColor::new("re".to_string()),
            Err(VehicleError::ColorTooShort { min: 3 })
        );
    }

    #[test]
    fn test_status_defaults_inactive() {
        assert_eq!(CaptainStatus::default(), CaptainStatus::Inactive);
        assert_eq!("active".parse::<CaptainStatus>(), Ok(CaptainStatus::Active));
        assert!("busy".parse::<CaptainStatus>().is_err());
    }
}
