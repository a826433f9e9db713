use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims: the registered claims every token carries, plus a typed
/// custom section flattened into the same JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<T> {
    /// Subject (principal identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    #[serde(flatten)]
    pub custom: T,
}

impl<T> Claims<T> {
    /// Claims issued now, expiring after `ttl`.
    pub fn issue(sub: impl ToString, ttl: Duration, custom: T) -> Self {
        Self::issued_at(sub, Utc::now(), ttl, custom)
    }

    /// Claims issued at an explicit instant.
    pub fn issued_at(sub: impl ToString, now: DateTime<Utc>, ttl: Duration, custom: T) -> Self {
        Self {
            sub: sub.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            custom,
        }
    }

    /// Expiration as a timestamp. Falls back to the Unix epoch for values
    /// chrono cannot represent.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Check if the token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
