use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::captain::errors::CaptainError;
use crate::captain::models::Captain;
use crate::captain::models::CaptainStatus;
use crate::captain::models::RegisterCaptainCommand;
use crate::captain::ports::CaptainRepository;
use crate::captain::ports::CaptainServicePort;
use crate::principal::credentials::hash_password;
use crate::principal::credentials::verify_password;
use crate::principal::models::LoginCommand;
use crate::principal::models::PrincipalId;
use crate::principal::models::PrincipalKind;
use crate::session::errors::SessionError;
use crate::session::ports::PrincipalResolver;

/// Domain service implementation for captain operations.
pub struct CaptainService<CR>
where
    CR: CaptainRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> CaptainService<CR>
where
    CR: CaptainRepository,
{
    pub fn new(repository: Arc<CR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<CR> CaptainServicePort for CaptainService<CR>
where
    CR: CaptainRepository,
{
    async fn register_captain(
        &self,
        command: RegisterCaptainCommand,
    ) -> Result<Captain, CaptainError> {
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(CaptainError::AlreadyExists(command.email.to_string()));
        }

        let password_hash = hash_password(&self.password_hasher, &command.password).await?;

        let captain = Captain {
            id: PrincipalId::new(),
            full_name: command.full_name,
            email: command.email,
            status: CaptainStatus::default(),
            vehicle: command.vehicle,
            location: None,
            socket_id: None,
            created_at: Utc::now(),
        };

        let created_captain = self.repository.create(captain, password_hash).await?;

        tracing::info!(
            captain_id = %created_captain.id,
            vehicle_type = %created_captain.vehicle.vehicle_type,
            "Captain registered"
        );

        Ok(created_captain)
    }

    async fn authenticate_captain(&self, command: LoginCommand) -> Result<Captain, CaptainError> {
        let Some(credentials) = self
            .repository
            .find_credentials_by_email(&command.email)
            .await?
        else {
            tracing::debug!("Captain login rejected: unknown email");
            return Err(CaptainError::InvalidCredentials);
        };

        let matches = verify_password(
            &self.password_hasher,
            command.password.expose(),
            &credentials.password_hash,
        )
        .await?;

        if !matches {
            tracing::debug!(
                captain_id = %credentials.principal.id,
                "Captain login rejected: password mismatch"
            );
            return Err(CaptainError::InvalidCredentials);
        }

        Ok(credentials.principal)
    }
}

#[async_trait]
impl<CR> PrincipalResolver for CaptainService<CR>
where
    CR: CaptainRepository,
{
    type Principal = Captain;

    fn kind(&self) -> PrincipalKind {
        PrincipalKind::Captain
    }

    async fn resolve(&self, id: &PrincipalId) -> Result<Option<Captain>, SessionError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| SessionError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::captain::models::PlateNumber;
    use crate::captain::models::SeatCapacity;
    use crate::captain::models::Vehicle;
    use crate::captain::models::VehicleColor;
    use crate::captain::models::VehicleType;
    use crate::principal::models::Credentials;
    use crate::principal::models::EmailAddress;
    use crate::principal::models::FullName;
    use crate::principal::models::Password;

    mock! {
        pub TestCaptainRepository {}

        #[async_trait]
        impl CaptainRepository for TestCaptainRepository {
            async fn create(&self, captain: Captain, password_hash: String) -> Result<Captain, CaptainError>;
            async fn find_by_id(&self, id: &PrincipalId) -> Result<Option<Captain>, CaptainError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Captain>, CaptainError>;
            async fn find_credentials_by_email(&self, email: &EmailAddress) -> Result<Option<Credentials<Captain>>, CaptainError>;
        }
    }

    fn hasher() -> auth::PasswordHasher {
        auth::PasswordHasher::with_cost(1024, 1, 1).unwrap()
    }

    fn vehicle() -> Vehicle {
        Vehicle {
            color: VehicleColor::new("black".to_string()).unwrap(),
            plate: PlateNumber::new("MH 01 AB 1234".to_string()).unwrap(),
            capacity: SeatCapacity::new(4).unwrap(),
            vehicle_type: VehicleType::Car,
        }
    }

    fn command(email: &str) -> RegisterCaptainCommand {
        RegisterCaptainCommand {
            full_name: FullName::new("Driver".to_string(), Some("Kumar".to_string())).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password: Password::new("password123".to_string()).unwrap(),
            vehicle: vehicle(),
        }
    }

    fn captain(email: &str) -> Captain {
        Captain {
            id: PrincipalId::new(),
            full_name: FullName::new("Driver".to_string(), None).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            status: CaptainStatus::Inactive,
            vehicle: vehicle(),
            location: None,
            socket_id: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_captain_starts_inactive() {
        let mut repository = MockTestCaptainRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|captain, hash| {
                captain.status == CaptainStatus::Inactive
                    && captain.vehicle.plate.as_str() == "MH 01 AB 1234"
                    && hash.starts_with("$argon2id$")
            })
            .times(1)
            .returning(|captain, _| Ok(captain));

        let service = CaptainService::new(Arc::new(repository), hasher());

        let captain = service
            .register_captain(command("driver@example.com"))
            .await
            .expect("Registration failed");

        assert_eq!(captain.status, CaptainStatus::Inactive);
        assert_eq!(captain.vehicle.vehicle_type, VehicleType::Car);
        assert!(captain.location.is_none());
    }

    #[tokio::test]
    async fn test_register_captain_already_exists() {
        let mut repository = MockTestCaptainRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(captain("driver@example.com"))));
        repository.expect_create().times(0);

        let service = CaptainService::new(Arc::new(repository), hasher());

        let result = service.register_captain(command("driver@example.com")).await;
        assert!(matches!(result, Err(CaptainError::AlreadyExists(_))));
        assert_eq!(result.unwrap_err().to_string(), "Captain already exists");
    }

    #[tokio::test]
    async fn test_register_captain_duplicate_plate() {
        let mut repository = MockTestCaptainRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|captain, _| {
            Err(CaptainError::PlateAlreadyRegistered(
                captain.vehicle.plate.as_str().to_string(),
            ))
        });

        let service = CaptainService::new(Arc::new(repository), hasher());

        let result = service.register_captain(command("driver@example.com")).await;
        assert!(matches!(result, Err(CaptainError::PlateAlreadyRegistered(_))));
    }

    #[tokio::test]
    async fn test_authenticate_captain() {
        let stored = captain("driver@example.com");
        let password_hash = hasher().hash("password123").unwrap();
        let mut repository = MockTestCaptainRepository::new();

        let returned = stored.clone();
        repository
            .expect_find_credentials_by_email()
            .returning(move |_| {
                Ok(Some(Credentials {
                    principal: returned.clone(),
                    password_hash: password_hash.clone(),
                }))
            });

        let service = CaptainService::new(Arc::new(repository), hasher());

        let ok = service
            .authenticate_captain(LoginCommand {
                email: EmailAddress::new("driver@example.com".to_string()).unwrap(),
                password: Password::new("password123".to_string()).unwrap(),
            })
            .await
            .expect("Authentication failed");
        assert_eq!(ok, stored);

        let rejected = service
            .authenticate_captain(LoginCommand {
                email: EmailAddress::new("driver@example.com".to_string()).unwrap(),
                password: Password::new("password124".to_string()).unwrap(),
            })
            .await;
        assert!(matches!(rejected, Err(CaptainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_resolve_missing_captain() {
        let mut repository = MockTestCaptainRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CaptainService::new(Arc::new(repository), hasher());

        assert_eq!(service.kind(), PrincipalKind::Captain);
        assert_eq!(service.resolve(&PrincipalId::new()).await, Ok(None));
    }
}
