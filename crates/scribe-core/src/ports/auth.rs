//! Authentication ports.

use uuid::Uuid;

/// Which of the two issued credentials a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived, presented on every API call.
    Access,
    /// Long-lived, only exchanged for new access tokens.
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// Claims carried by a validated token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub username: String,
    pub kind: TokenKind,
    pub exp: i64,
}

/// Credentials handed out at login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub refresh: String,
    pub access: String,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Issue a refresh token and an access token bound to the user.
    fn issue_pair(&self, user_id: Uuid, username: &str) -> Result<TokenPair, AuthError>;

    /// Validate and decode a token, requiring it to be of `expected` kind.
    fn validate(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, AuthError>;

    /// Exchange a valid refresh token for a fresh access token.
    fn refresh_access(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims = self.validate(refresh_token, TokenKind::Refresh)?;
        self.issue_access(claims.user_id, &claims.username)
    }

    /// Issue an access token only.
    fn issue_access(&self, user_id: Uuid, username: &str) -> Result<String, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Wrong token type: expected {expected}")]
    WrongTokenKind { expected: &'static str },

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
