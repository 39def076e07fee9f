//! Session token signing and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};

use assetdesk_core::config::AuthConfig;
use assetdesk_core::error::AppError;
use assetdesk_entity::account::Account;

use super::claims::Claims;

/// Signs and validates session tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct SessionCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Session TTL in days.
    ttl_days: i64,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// The signed token string.
    pub token: String,
    /// When the token stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl SessionCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token presented at or after `exp` is rejected.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
            ttl_days: config.session_ttl_days as i64,
        }
    }

    /// Issues a signed session token for the given account.
    pub fn issue(&self, account: &Account) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(self.ttl_days);

        let claims = Claims {
            sub: account.id,
            role: account.role,
            username: account.username.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(SessionToken { token, expires_at })
    }

    /// Decodes and validates a session token string.
    ///
    /// Every failure mode — bad format, wrong signature, expired —
    /// maps to the same invalid-session error so callers cannot tell
    /// them apart.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::invalid_session("Session is invalid or expired"))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use assetdesk_entity::account::{Account, Role};

    use super::*;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            session_secret: secret.to_string(),
            session_ttl_days: 7,
            cookie_name: "assetdesk_session".to_string(),
            password_min_length: 8,
        }
    }

    fn test_account() -> Account {
        let now = Utc::now();
        Account {
            id: Uuid::new_v4(),
            username: "asmith".to_string(),
            password_hash: "$argon2id$unused".to_string(),
            display_name: Some("Alice Smith".to_string()),
            role: Role::Admin,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    #[test]
    fn test_issue_then_decode_preserves_claims() {
        let codec = SessionCodec::new(&test_config("test-secret"));
        let account = test_account();

        let issued = codec.issue(&account).unwrap();
        let claims = codec.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.username, "asmith");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let codec = SessionCodec::new(&test_config("test-secret"));
        let issued = codec.issue(&test_account()).unwrap();

        let mut tampered = issued.token.clone();
        tampered.pop();
        tampered.push('x');

        let err = codec.decode(&tampered).unwrap_err();
        assert_eq!(err.kind, assetdesk_core::error::ErrorKind::InvalidSession);
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let codec = SessionCodec::new(&test_config("secret-a"));
        let other = SessionCodec::new(&test_config("secret-b"));

        let issued = other.issue(&test_account()).unwrap();
        assert!(codec.decode(&issued.token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config("test-secret");
        let codec = SessionCodec::new(&config);
        let account = test_account();

        // Hand-craft a token that expired a minute ago.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: account.id,
            role: account.role,
            username: account.username.clone(),
            iat: now - 120,
            exp: now - 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.session_secret.as_bytes()),
        )
        .unwrap();

        let err = codec.decode(&token).unwrap_err();
        assert_eq!(err.kind, assetdesk_core::error::ErrorKind::InvalidSession);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let codec = SessionCodec::new(&test_config("test-secret"));
        assert!(codec.decode("not.a.token").is_err());
        assert!(codec.decode("").is_err());
    }
}
