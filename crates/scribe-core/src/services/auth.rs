use std::sync::Arc;

use crate::domain::User;
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenPair, TokenService, UserRepository};

/// Registration input, already shape-validated by the caller.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration, login and token refresh.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Create an account. Fails if the normalized username is taken.
    pub async fn register(&self, account: NewAccount) -> Result<User, DomainError> {
        let username = normalized_username(&account.username)?;

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(DomainError::Duplicate("Username already exists".to_string()));
        }

        let password_hash = self.passwords.hash(&account.password)?;
        let user = User::new(&username, account.email, password_hash);

        // A concurrent registration can still win the unique index.
        let saved = self.users.create(user).await.map_err(|e| match e {
            RepoError::Duplicate(_) => DomainError::Duplicate("Username already exists".to_string()),
            other => other.into(),
        })?;

        tracing::info!(user_id = %saved.id, "User registered");
        Ok(saved)
    }

    /// Check credentials and issue a refresh/access token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, DomainError> {
        let username = normalized_username(username)?;

        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| DomainError::not_found("user", &username))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::info!(user_id = %user.id, "Login rejected: bad password");
            return Err(DomainError::InvalidCredentials);
        }

        let tokens = self.tokens.issue_pair(user.id, &user.username)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(tokens)
    }

    /// Exchange a refresh token for a new access token.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, DomainError> {
        Ok(self.tokens.refresh_access(refresh_token)?)
    }
}

/// Normalize a submitted username; whitespace-only input is blank.
fn normalized_username(raw: &str) -> Result<String, DomainError> {
    let username = User::normalize_username(raw);
    if username.is_empty() {
        return Err(DomainError::validation(
            "username",
            "This field may not be blank.",
        ));
    }
    Ok(username)
}
