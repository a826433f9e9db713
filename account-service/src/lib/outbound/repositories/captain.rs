use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::captain::errors::CaptainError;
use crate::captain::models::Captain;
use crate::captain::models::CaptainStatus;
use crate::captain::models::Location;
use crate::captain::models::PlateNumber;
use crate::captain::models::SeatCapacity;
use crate::captain::models::Vehicle;
use crate::captain::models::VehicleColor;
use crate::captain::models::VehicleType;
use crate::captain::ports::CaptainRepository;
use crate::principal::models::Credentials;
use crate::principal::models::EmailAddress;
use crate::principal::models::FullName;
use crate::principal::models::PrincipalId;

const EMAIL_UNIQUE_CONSTRAINT: &str = "captains_email_key";
const PLATE_UNIQUE_CONSTRAINT: &str = "captains_vehicle_plate_key";

pub struct PostgresCaptainRepository {
    pool: PgPool,
}

impl PostgresCaptainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CaptainRow {
    id: Uuid,
    first_name: String,
    last_name: Option<String>,
    email: String,
    socket_id: Option<String>,
    status: String,
    vehicle_color: String,
    vehicle_plate: String,
    vehicle_capacity: i32,
    vehicle_type: String,
    location_lat: Option<f64>,
    location_lng: Option<f64>,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CaptainCredentialsRow {
    #[sqlx(flatten)]
    captain: CaptainRow,
    password_hash: String,
}

impl TryFrom<CaptainRow> for Captain {
    type Error = CaptainError;

    fn try_from(row: CaptainRow) -> Result<Self, Self::Error> {
        let location = match (row.location_lat, row.location_lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        };

        Ok(Captain {
            id: PrincipalId(row.id),
            full_name: FullName::new(row.first_name, row.last_name)?,
            email: EmailAddress::new(row.email)?,
            status: row.status.parse::<CaptainStatus>()?,
            vehicle: Vehicle {
                color: VehicleColor::new(row.vehicle_color)?,
                plate: PlateNumber::new(row.vehicle_plate)?,
                capacity: SeatCapacity::new(i64::from(row.vehicle_capacity))?,
                vehicle_type: row.vehicle_type.parse::<VehicleType>()?,
            },
            location,
            socket_id: row.socket_id,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CaptainRepository for PostgresCaptainRepository {
    async fn create(
        &self,
        captain: Captain,
        password_hash: String,
    ) -> Result<Captain, CaptainError> {
        sqlx::query(
            r#"
            INSERT INTO captains (
                id, first_name, last_name, email, password_hash, socket_id, status,
                vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type,
                location_lat, location_lng, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(captain.id.0)
        .bind(captain.full_name.first_name())
        .bind(captain.full_name.last_name())
        .bind(captain.email.as_str())
        .bind(&password_hash)
        .bind(captain.socket_id.as_deref())
        .bind(captain.status.as_str())
        .bind(captain.vehicle.color.as_str())
        .bind(captain.vehicle.plate.as_str())
        .bind(captain.vehicle.capacity.get())
        .bind(captain.vehicle.vehicle_type.as_str())
        .bind(captain.location.map(|l| l.lat))
        .bind(captain.location.map(|l| l.lng))
        .bind(captain.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
                        return CaptainError::AlreadyExists(captain.email.to_string());
                    }
                    if db_err.constraint() == Some(PLATE_UNIQUE_CONSTRAINT) {
                        return CaptainError::PlateAlreadyRegistered(
                            captain.vehicle.plate.as_str().to_string(),
                        );
                    }
                }
            }
            CaptainError::DatabaseError(e.to_string())
        })?;

        Ok(captain)
    }

    async fn find_by_id(&self, id: &PrincipalId) -> Result<Option<Captain>, CaptainError> {
        sqlx::query_as::<_, CaptainRow>(
            r#"
            SELECT id, first_name, last_name, email, socket_id, status,
                   vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type,
                   location_lat, location_lng, created_at
            FROM captains
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CaptainError::DatabaseError(e.to_string()))?
        .map(Captain::try_from)
        .transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Captain>, CaptainError> {
        sqlx::query_as::<_, CaptainRow>(
            r#"
            SELECT id, first_name, last_name, email, socket_id, status,
                   vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type,
                   location_lat, location_lng, created_at
            FROM captains
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CaptainError::DatabaseError(e.to_string()))?
        .map(Captain::try_from)
        .transpose()
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credentials<Captain>>, CaptainError> {
        let row = sqlx::query_as::<_, CaptainCredentialsRow>(
            r#"
            SELECT id, first_name, last_name, email, socket_id, status,
                   vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type,
                   location_lat, location_lng, created_at, password_hash
            FROM captains
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CaptainError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Credentials {
                principal: Captain::try_from(r.captain)?,
                password_hash: r.password_hash,
            })),
            None => Ok(None),
        }
    }
}
