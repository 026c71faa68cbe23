use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Session token claim set.
///
/// Exactly four claims: the user, the application the token is scoped to,
/// the user's email, and the absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub user_id: i64,
    pub app_id: i32,
    pub email: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims expiring `ttl` from now.
    ///
    /// The issuance instant is read once; `exp` is that instant plus `ttl`.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user identifier
    /// * `app_id` - Application the token is scoped to
    /// * `email` - User email address
    /// * `ttl` - Token lifetime
    ///
    /// # Errors
    /// * `ExpirationOutOfRange` - `now + ttl` is not a representable instant
    pub fn new(
        user_id: i64,
        app_id: i32,
        email: impl Into<String>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = Utc::now()
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpirationOutOfRange)?;

        Ok(Self {
            user_id,
            app_id,
            email: email.into(),
            exp: expiration.timestamp(),
        })
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }
}
