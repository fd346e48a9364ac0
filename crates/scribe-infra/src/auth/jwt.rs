//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scribe_core::ports::{AuthError, TokenClaims, TokenKind, TokenPair, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            access_ttl_minutes: 5,
            refresh_ttl_days: 1,
            issuer: "scribe-api".to_string(),
        }
    }
}

impl JwtConfig {
    /// Load from `JWT_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        // Warn if using default secret in production
        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        Self {
            secret,
            access_ttl_minutes: std::env::var("JWT_ACCESS_TTL_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.access_ttl_minutes),
            refresh_ttl_days: std::env::var("JWT_REFRESH_TTL_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.refresh_ttl_days),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user_id
    username: String,
    token_type: String,
    jti: String,
    exp: i64,    // expiration timestamp
    iat: i64,    // issued at
    iss: String, // issuer
}

/// JWT-based token service issuing HS256 access/refresh pairs.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::from_env())
    }

    fn encode(&self, user_id: Uuid, username: &str, kind: TokenKind) -> Result<String, AuthError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => TimeDelta::minutes(self.config.access_ttl_minutes),
            TokenKind::Refresh => TimeDelta::days(self.config.refresh_ttl_days),
        };

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_type: kind.as_str().to_string(),
            jti: Uuid::new_v4().simple().to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

impl TokenService for JwtTokenService {
    fn issue_pair(&self, user_id: Uuid, username: &str) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            refresh: self.encode(user_id, username, TokenKind::Refresh)?,
            access: self.encode(user_id, username, TokenKind::Access)?,
        })
    }

    fn issue_access(&self, user_id: Uuid, username: &str) -> Result<String, AuthError> {
        self.encode(user_id, username, TokenKind::Access)
    }

    fn validate(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        if token_data.claims.token_type != expected.as_str() {
            return Err(AuthError::WrongTokenKind {
                expected: expected.as_str(),
            });
        }

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            user_id,
            username: token_data.claims.username,
            kind: expected,
            exp: token_data.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            access_ttl_minutes: 5,
            refresh_ttl_days: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_issue_pair_yields_distinct_tokens() {
        let service = JwtTokenService::new(test_config());

        let pair = service.issue_pair(Uuid::new_v4(), "alice").unwrap();

        assert!(!pair.access.is_empty());
        assert!(!pair.refresh.is_empty());
        assert_ne!(pair.access, pair.refresh);
    }

    #[test]
    fn test_validate_access_token_success() {
        let service = JwtTokenService::new(test_config());
        let user_id = Uuid::new_v4();

        let pair = service.issue_pair(user_id, "alice").unwrap();
        let claims = service.validate(&pair.access, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let service = JwtTokenService::new(test_config());
        let pair = service.issue_pair(Uuid::new_v4(), "alice").unwrap();

        let result = service.validate(&pair.refresh, TokenKind::Access);
        assert!(matches!(result, Err(AuthError::WrongTokenKind { .. })));

        let result = service.refresh_access(&pair.access);
        assert!(matches!(result, Err(AuthError::WrongTokenKind { .. })));
    }

    #[test]
    fn test_refresh_access_issues_valid_access_token() {
        let service = JwtTokenService::new(test_config());
        let user_id = Uuid::new_v4();
        let pair = service.issue_pair(user_id, "alice").unwrap();

        let access = service.refresh_access(&pair.refresh).unwrap();
        let claims = service.validate(&access, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id, user_id);
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate("invalid-token", TokenKind::Access);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtTokenService::new(JwtConfig {
            access_ttl_minutes: -10,
            ..test_config()
        });

        let pair = service.issue_pair(Uuid::new_v4(), "alice").unwrap();
        let result = service.validate(&pair.access, TokenKind::Access);

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_validate_wrong_issuer_token() {
        let service1 = JwtTokenService::new(JwtConfig {
            issuer: "issuer1".to_string(),
            ..test_config()
        });
        let service2 = JwtTokenService::new(JwtConfig {
            issuer: "issuer2".to_string(),
            ..test_config()
        });

        let pair = service1.issue_pair(Uuid::new_v4(), "alice").unwrap();

        assert!(service2.validate(&pair.access, TokenKind::Access).is_err());
    }
}
