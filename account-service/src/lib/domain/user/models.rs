use chrono::DateTime;
use chrono::Utc;

use crate::principal::models::EmailAddress;
use crate::principal::models::FullName;
use crate::principal::models::Password;
use crate::principal::models::PrincipalId;

/// User aggregate entity.
///
/// Represents a registered rider. The password hash is not part of the
/// entity; it only travels inside `Credentials<User>` on the login path.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: PrincipalId,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `full_name` - Validated name
    /// * `email` - Validated email address
    /// * `password` - Plaintext password that passed policy (hashed by the service)
    pub fn new(full_name: FullName, email: EmailAddress, password: Password) -> Self {
        Self {
            full_name,
            email,
            password,
        }
    }
}
