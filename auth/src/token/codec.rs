use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;
use super::payload::SessionPayload;

/// Registered claims carried by the signed session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    exp: i64,
    iat: i64,
}

/// Signs and verifies the compact session token.
///
/// Single fixed symmetric algorithm (HS256). Key material is injected by
/// the composition root; the codec never reads the environment, so it
/// constructs with any secret and deployments are responsible for
/// rejecting a missing one at startup.
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl SessionTokenCodec {
    /// Create a new codec with a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode a session payload into a signed token.
    ///
    /// Sets `iat` to now and `exp` to the payload expiry, keeping the
    /// embedded claim consistent with `payload.expires_at`.
    ///
    /// # Arguments
    /// * `payload` - Session payload to sign
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn encode(&self, payload: &SessionPayload) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims {
            sub: payload.user_id.clone(),
            exp: payload.expires_at.timestamp(),
            iat: Utc::now().timestamp(),
        };

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify and decode a session token.
    ///
    /// Fail-closed contract: any failure - bad signature, wrong algorithm,
    /// malformed structure, expired token, empty input - yields `None`.
    /// Callers must treat `None` as "absent session"; the boundary exposes
    /// no distinction between an expired and a forged token.
    ///
    /// # Arguments
    /// * `token` - Signed token string, possibly empty or garbage
    ///
    /// # Returns
    /// The verified payload, or `None` when there is no valid session
    pub fn decode(&self, token: &str) -> Option<SessionPayload> {
        if token.is_empty() {
            return None;
        }

        let mut validation = Validation::new(self.algorithm);
        // The payload is invalid at the embedded expiry instant, not a
        // grace period after it.
        validation.leeway = 0;

        let token_data = match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(error = %e, "Session token rejected");
                return None;
            }
        };

        let expires_at = DateTime::from_timestamp(token_data.claims.exp, 0)?;

        Some(SessionPayload {
            user_id: token_data.claims.sub,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn future_payload(user_id: &str) -> SessionPayload {
        SessionPayload::for_user(user_id, Utc::now() + Duration::hours(1))
    }

    #[test]
    fn test_encode_and_decode_round_trip() {
        let codec = SessionTokenCodec::new(SECRET);

        let token = codec
            .encode(&future_payload("user123"))
            .expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded.user_id.as_deref(), Some("user123"));
    }

    #[test]
    fn test_decode_preserves_missing_user_id() {
        let codec = SessionTokenCodec::new(SECRET);
        let payload = SessionPayload {
            user_id: None,
            expires_at: Utc::now() + Duration::hours(1),
        };

        let token = codec.encode(&payload).expect("Failed to encode token");
        let decoded = codec.decode(&token).expect("Failed to decode token");

        assert_eq!(decoded.user_id, None);
    }

    #[test]
    fn test_decode_garbage_is_none() {
        let codec = SessionTokenCodec::new(SECRET);

        assert!(codec.decode("").is_none());
        assert!(codec.decode("not-a-token").is_none());
        assert!(codec.decode("a.b.c").is_none());
    }

    #[test]
    fn test_decode_expired_token_is_none() {
        let codec = SessionTokenCodec::new(SECRET);
        let payload = SessionPayload::for_user("user123", Utc::now() - Duration::hours(1));

        let token = codec.encode(&payload).expect("Failed to encode token");

        assert!(codec.decode(&token).is_none());
    }

    #[test]
    fn test_decode_with_wrong_secret_is_none() {
        let codec = SessionTokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let other = SessionTokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = codec
            .encode(&future_payload("user123"))
            .expect("Failed to encode token");

        assert!(other.decode(&token).is_none());
    }

    #[test]
    fn test_decode_tampered_signature_is_none() {
        let codec = SessionTokenCodec::new(SECRET);
        let token = codec
            .encode(&future_payload("user123"))
            .expect("Failed to encode token");

        let signature_start = token.rfind('.').unwrap() + 1;

        // Flip every byte of the signature region, one at a time
        for i in signature_start..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            if tampered == token {
                continue;
            }
            assert!(codec.decode(&tampered).is_none(), "byte {} accepted", i);
        }
    }
}
