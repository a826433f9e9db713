use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::principal::credentials::hash_password;
use crate::principal::credentials::verify_password;
use crate::principal::models::LoginCommand;
use crate::principal::models::PrincipalId;
use crate::principal::models::PrincipalKind;
use crate::session::errors::SessionError;
use crate::session::ports::PrincipalResolver;
use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Hasher configured with the deployment's cost parameters
    pub fn new(repository: Arc<UR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Friendly early answer; the unique index still decides under races.
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(UserError::AlreadyExists(command.email.to_string()));
        }

        let password_hash = hash_password(&self.password_hasher, &command.password).await?;

        let user = User {
            id: PrincipalId::new(),
            full_name: command.full_name,
            email: command.email,
            socket_id: None,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user, password_hash).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn authenticate_user(&self, command: LoginCommand) -> Result<User, UserError> {
        let Some(credentials) = self
            .repository
            .find_credentials_by_email(&command.email)
            .await?
        else {
            tracing::debug!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let matches = verify_password(
            &self.password_hasher,
            command.password.expose(),
            &credentials.password_hash,
        )
        .await?;

        if !matches {
            tracing::debug!(user_id = %credentials.principal.id, "Login rejected: password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        Ok(credentials.principal)
    }
}

#[async_trait]
impl<UR> PrincipalResolver for UserService<UR>
where
    UR: UserRepository,
{
    type Principal = User;

    fn kind(&self) -> PrincipalKind {
        PrincipalKind::User
    }

    async fn resolve(&self, id: &PrincipalId) -> Result<Option<User>, SessionError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| SessionError::Store(e.to_string()))
    }
}
