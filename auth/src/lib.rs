//! Authentication primitives shared by the account service.
//!
//! Provides:
//! - Password hashing (Argon2id, tunable cost)
//! - Signed, time-limited JWT tokens with typed claims
//!
//! The library knows nothing about principals, stores or HTTP. The service
//! decides what goes into the custom part of the claims and how tokens travel.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
//! struct Scope {
//!     role: String,
//! }
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::issue("user123", Duration::hours(24), Scope { role: "rider".into() });
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims<Scope> = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
