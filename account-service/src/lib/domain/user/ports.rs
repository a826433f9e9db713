use async_trait::async_trait;

use crate::principal::models::Credentials;
use crate::principal::models::EmailAddress;
use crate::principal::models::LoginCommand;
use crate::principal::models::PrincipalId;
use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated name, email and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Check a user's credentials.
    ///
    /// Unknown email and wrong password are reported identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password mismatch
    /// * `Password` - Stored hash could not be verified
    /// * `DatabaseError` - Database operation failed
    async fn authenticate_user(&self, command: LoginCommand) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user with its password hash.
    ///
    /// The store's unique index on email is the authority on duplicates.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User, password_hash: String) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PrincipalId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address, without the password hash.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address together with the password hash.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Credentials<User>>, UserError>;
}
