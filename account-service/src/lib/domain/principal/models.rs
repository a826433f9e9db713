use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::principal::errors::EmailError;
use crate::principal::errors::NameError;
use crate::principal::errors::PasswordPolicyError;
use crate::principal::errors::PrincipalIdError;
use crate::principal::errors::PrincipalKindError;

/// The two kinds of actor that can hold a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// A rider.
    User,
    /// A driver.
    Captain,
}

impl PrincipalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::User => "user",
            PrincipalKind::Captain => "captain",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrincipalKind {
    type Err = PrincipalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(PrincipalKind::User),
            "captain" => Ok(PrincipalKind::Captain),
            other => Err(PrincipalKindError(other.to_string())),
        }
    }
}

/// Identifier shared by users and captains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrincipalId(pub Uuid);

impl PrincipalId {
    /// Generate a new random principal ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a principal ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PrincipalIdError> {
        Uuid::parse_str(s)
            .map(PrincipalId)
            .map_err(|e| PrincipalIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Trimmed and lower-cased so the store's unique index compares addresses
/// case-insensitively. Format is checked with an RFC 5322 parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MIN_LENGTH: usize = 5;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 5 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();

        if email.chars().count() < Self::MIN_LENGTH {
            return Err(EmailError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First and optional last name.
///
/// A blank last name is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    first_name: String,
    last_name: Option<String>,
}

impl FullName {
    const MIN_LENGTH: usize = 3;

    /// Create a validated full name.
    ///
    /// # Errors
    /// * `FirstNameTooShort` - First name shorter than 3 characters
    /// * `LastNameTooShort` - Last name present but shorter than 3 characters
    pub fn new(first_name: String, last_name: Option<String>) -> Result<Self, NameError> {
        let first_name = first_name.trim().to_string();
        if first_name.chars().count() < Self::MIN_LENGTH {
            return Err(NameError::FirstNameTooShort {
                min: Self::MIN_LENGTH,
            });
        }

        let last_name = last_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if let Some(name) = &last_name {
            if name.chars().count() < Self::MIN_LENGTH {
                return Err(NameError::LastNameTooShort {
                    min: Self::MIN_LENGTH,
                });
            }
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

/// Plaintext password accepted at registration and login.
///
/// Only ever handed to the hasher. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// # Errors
    /// * `TooShort` - Fewer than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// A principal read together with its stored password hash.
///
/// Only the login path asks the store for this.
#[derive(Debug, Clone)]
pub struct Credentials<P> {
    pub principal: P,
    pub password_hash: String,
}

/// Command to log in either kind of principal.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalized() {
        let email = EmailAddress::new("  Rider@Example.COM ".to_string()).unwrap();
        assert_eq!(email.as_str(), "rider@example.com");
    }

    #[test]
    fn test_email_rejects_invalid() {
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
        assert_eq!(
            EmailAddress::new("a@b".to_string()),
            Err(EmailError::TooShort { min: 5 })
        );
    }

    #[test]
    fn test_full_name_rules() {
        let name = FullName::new("Alice".to_string(), Some("  ".to_string())).unwrap();
        assert_eq!(name.first_name(), "Alice");
        assert_eq!(name.last_name(), None);

        assert_eq!(
            FullName::new("Al".to_string(), None),
            Err(NameError::FirstNameTooShort { min: 3 })
        );
        assert_eq!(
            FullName::new("Alice".to_string(), Some("Li".to_string())),
            Err(NameError::LastNameTooShort { min: 3 })
        );
    }

    #[test]
    fn test_password_policy_and_redaction() {
        assert_eq!(
            Password::new("12345".to_string()),
            Err(PasswordPolicyError::TooShort { min: 6 })
        );

        let password = Password::new("secret-value".to_string()).unwrap();
        assert_eq!(password.expose(), "secret-value");
        assert!(!format!("{:?}", password).contains("secret-value"));
    }

    #[test]
    fn test_login_command_debug_hides_password() {
        let command = LoginCommand {
            email: EmailAddress::new("rider@example.com".to_string()).unwrap(),
            password: Password::new("hunter2-plaintext".to_string()).unwrap(),
        };

        let printed = format!("{:?}", command);
        assert!(printed.contains("rider@example.com"));
        assert!(!printed.contains("hunter2-plaintext"));
    }

    #[test]
    fn test_principal_kind_wire_format() {
        assert_eq!(
            serde_json::to_value(PrincipalKind::Captain).unwrap(),
            serde_json::json!("captain")
        );
        assert_eq!("user".parse::<PrincipalKind>(), Ok(PrincipalKind::User));
        assert!("driver".parse::<PrincipalKind>().is_err());
    }

    #[test]
    fn test_principal_id_parse() {
        let id = PrincipalId::new();
        assert_eq!(PrincipalId::from_string(&id.to_string()), Ok(id));
        assert!(PrincipalId::from_string("nope").is_err());
    }
}
