use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Signs with HS256 using a secret handed in at construction. Decoding
/// requires an `exp` claim and rejects expired tokens with no leeway unless
/// one is configured.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    leeway_secs: u64,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from configuration, never from code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            leeway_secs: 0,
        }
    }

    /// Tolerate clock skew of `leeway_secs` when checking expiry.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Malformed` - Not a JWT, wrong algorithm, missing `exp`, or claims of the wrong shape
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = self.leeway_secs;

        decode::<T>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;
    use serde::Deserialize;

    use super::*;
    use crate::jwt::Claims;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Scope {
        role: String,
    }

    fn claims(ttl: Duration) -> Claims<Scope> {
        Claims::issue(
            "user123",
            ttl,
            Scope {
                role: "rider".to_string(),
            },
        )
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let claims = claims(Duration::hours(24));

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: Claims<Scope> = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode::<Claims<Scope>>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1.encode(&claims(Duration::hours(1))).unwrap();

        let result = handler2.decode::<Claims<Scope>>(&token);
        assert_eq!(result, Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let issued = Utc::now() - Duration::hours(25);
        let claims = Claims::issued_at(
            "user123",
            issued,
            Duration::hours(24),
            Scope {
                role: "rider".to_string(),
            },
        );

        let token = handler.encode(&claims).unwrap();

        let result = handler.decode::<Claims<Scope>>(&token);
        assert_eq!(result, Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_leeway_accepts_recently_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").with_leeway(120);
        let token = handler.encode(&claims(Duration::seconds(-30))).unwrap();

        assert!(handler.decode::<Claims<Scope>>(&token).is_ok());
    }

    #[test]
    fn test_decode_requires_expiration() {
        #[derive(Serialize, Deserialize)]
        struct NoExpiry {
            sub: String,
        }

        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler
            .encode(&NoExpiry {
                sub: "user123".to_string(),
            })
            .unwrap();

        let result = handler.decode::<NoExpiry>(&token);
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler.encode(&claims(Duration::hours(1))).unwrap();
        let other = handler
            .encode(&Claims::issue(
                "someone_else",
                Duration::hours(1),
                Scope {
                    role: "rider".to_string(),
                },
            ))
            .unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        let result = handler.decode::<Claims<Scope>>(&forged);
        assert_eq!(result, Err(JwtError::InvalidSignature));
    }
}
