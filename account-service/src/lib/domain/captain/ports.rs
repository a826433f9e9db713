use async_trait::async_trait;

use crate::captain::errors::CaptainError;
use crate::captain::models::Captain;
use crate::captain::models::RegisterCaptainCommand;
use crate::principal::models::Credentials;
use crate::principal::models::EmailAddress;
use crate::principal::models::LoginCommand;
use crate::principal::models::PrincipalId;

/// Port for captain domain service operations.
#[async_trait]
pub trait CaptainServicePort: Send + Sync + 'static {
    /// Register a new captain and their vehicle.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `PlateAlreadyRegistered` - Another captain drives this plate
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_captain(
        &self,
        command: RegisterCaptainCommand,
    ) -> Result<Captain, CaptainError>;

    /// Check a captain's credentials.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password mismatch
    /// * `Password` - Stored hash could not be verified
    /// * `DatabaseError` - Database operation failed
    async fn authenticate_captain(&self, command: LoginCommand) -> Result<Captain, CaptainError>;
}

/// Persistence operations for captain aggregate.
#[async_trait]
pub trait CaptainRepository: Send + Sync + 'static {
    /// Persist new captain with its password hash.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `PlateAlreadyRegistered` - Plate is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, captain: Captain, password_hash: String)
        -> Result<Captain, CaptainError>;

    async fn find_by_id(&self, id: &PrincipalId) -> Result<Option<Captain>, CaptainError>;

    /// Retrieve captain by email address, without the password hash.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Captain>, CaptainError>;

    /// Retrieve captain by email address together with the password hash.
    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credentials<Captain>>, CaptainError>;
}
