use thiserror::Error;

/// Error for PrincipalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrincipalIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Invalid Email")]
    InvalidFormat(String),
}

/// Error for FullName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Firstname must be at least {min} characters long")]
    FirstNameTooShort { min: usize },

    #[error("Lastname must be at least {min} characters long")]
    LastNameTooShort { min: usize },
}

/// Error for Password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
}

/// Error for PrincipalKind parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown principal kind: {0}")]
pub struct PrincipalKindError(pub String);
