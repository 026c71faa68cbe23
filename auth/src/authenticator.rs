use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds no signing key of its own: tokens are signed with the secret of the
/// application they are issued for. The token lifetime is fixed at construction
/// and shared by every token this instance issues.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_ttl: Duration,
}

/// Result of successful token issuance.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed JWT access token
    pub access_token: String,

    /// Expiry embedded in the token (Unix timestamp)
    pub expires_at: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_ttl` - Lifetime of every issued token
    pub fn new(token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password too long or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, AuthenticationError> {
        Ok(self.password_hasher.hash(password)?)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the hash is unreadable)
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash) {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Issue a token for a user, scoped to one application.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user
    /// * `app_id` - Application the token is scoped to
    /// * `email` - User email, embedded in the token
    /// * `secret` - Signing secret of that application
    ///
    /// # Errors
    /// * `JwtError` - Expiry out of range or signing failed
    pub fn issue_token(
        &self,
        user_id: i64,
        app_id: i32,
        email: &str,
        secret: &[u8],
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let claims = Claims::new(user_id, app_id, email, self.token_ttl)?;
        let access_token = JwtHandler::new(secret).encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Validate and decode a token issued for the application owning `secret`.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        JwtHandler::new(secret).decode(token)
    }
}
