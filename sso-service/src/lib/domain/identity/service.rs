use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Duration;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::StorageError;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::UserId;
use crate::domain::identity::ports::AdminChecker;
use crate::domain::identity::ports::AppProvider;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::UserProvider;
use crate::domain::identity::ports::UserSaver;

/// Domain service implementation for authentication operations.
///
/// Each credential store capability is injected separately. Nothing is mutated
/// after construction, so one instance serves any number of concurrent calls.
pub struct AuthService<US, UP, AC, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AC: AdminChecker,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    admin_checker: Arc<AC>,
    app_provider: Arc<AP>,
    authenticator: Arc<Authenticator>,
}

impl<US, UP, AC, AP> AuthService<US, UP, AC, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AC: AdminChecker,
    AP: AppProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - Persists new users
    /// * `user_provider` - Looks users up by email
    /// * `admin_checker` - Reads the administrator flag
    /// * `app_provider` - Looks applications up by ID
    /// * `token_ttl` - Lifetime of every issued session token
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        admin_checker: Arc<AC>,
        app_provider: Arc<AP>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            admin_checker,
            app_provider,
            authenticator: Arc::new(Authenticator::new(token_ttl)),
        }
    }
}

/// Runs Argon2 work on the blocking pool so a slow hash does not stall other
/// requests. The closure runs inside the caller's span.
async fn run_blocking<F, T>(op: &'static str, f: F) -> Result<T, AuthError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(f))
        .await
        .map_err(|e| {
            tracing::error!(op, error = %e, "Password task failed");
            AuthError::internal(op, e)
        })
}

#[async_trait]
impl<US, UP, AC, AP> AuthServicePort for AuthService<US, UP, AC, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AC: AdminChecker,
    AP: AppProvider,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register";

        tracing::info!(op = OP, email = %command.email, "Registering user");

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.clone();
        let password_hash =
            run_blocking(OP, move || authenticator.hash_password(password.as_str()))
                .await?
                .map_err(|e| {
                    tracing::error!(
                        op = OP,
                        email = %command.email,
                        error = %e,
                        "Failed to hash password"
                    );
                    AuthError::internal(OP, e)
                })?;

        let user_id = self
            .user_saver
            .save_user(&command.email, &password_hash)
            .await
            .map_err(|e| match e {
                StorageError::UserExists => {
                    tracing::warn!(op = OP, email = %command.email, "User already exists");
                    AuthError::UserExists
                }
                e => {
                    tracing::error!(
                        op = OP,
                        email = %command.email,
                        error = %e,
                        "Failed to save user"
                    );
                    AuthError::internal(OP, e)
                }
            })?;

        tracing::info!(
            op = OP,
            email = %command.email,
            user_id = %user_id,
            "User registered"
        );

        Ok(user_id)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        const OP: &str = "auth.login";

        tracing::info!(
            op = OP,
            email = %command.email,
            app_id = %command.app_id,
            "Logging in user"
        );

        // Credentials are checked before the application is looked up, and every
        // failure among the three collapses to InvalidCredentials.
        let user = self
            .user_provider
            .user(&command.email)
            .await
            .map_err(|e| match e {
                StorageError::UserNotFound => {
                    tracing::warn!(op = OP, email = %command.email, "User not found");
                    AuthError::InvalidCredentials
                }
                e => {
                    tracing::error!(
                        op = OP,
                        email = %command.email,
                        error = %e,
                        "Failed to get user"
                    );
                    AuthError::internal(OP, e)
                }
            })?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.clone();
        let password_hash = user.password_hash.clone();
        run_blocking(OP, move || {
            authenticator.verify_password(password.as_str(), &password_hash)
        })
        .await?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::info!(op = OP, email = %command.email, "Invalid password");
                AuthError::InvalidCredentials
            }
            e => {
                tracing::error!(
                    op = OP,
                    email = %command.email,
                    error = %e,
                    "Failed to verify password"
                );
                AuthError::internal(OP, e)
            }
        })?;

        let app = self
            .app_provider
            .app(command.app_id)
            .await
            .map_err(|e| match e {
                StorageError::AppNotFound => {
                    tracing::warn!(op = OP, app_id = %command.app_id, "App not found");
                    AuthError::InvalidCredentials
                }
                e => {
                    tracing::error!(
                        op = OP,
                        app_id = %command.app_id,
                        error = %e,
                        "Failed to get app"
                    );
                    AuthError::internal(OP, e)
                }
            })?;

        let result = self
            .authenticator
            .issue_token(
                user.id.0,
                app.id.0,
                user.email.as_str(),
                app.secret.as_bytes(),
            )
            .map_err(|e| {
                tracing::error!(
                    op = OP,
                    email = %command.email,
                    error = %e,
                    "Failed to issue token"
                );
                AuthError::internal(OP, e)
            })?;

        tracing::info!(
            op = OP,
            email = %command.email,
            app = %app.name,
            expires_at = result.expires_at,
            "User logged in"
        );

        Ok(result.access_token)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        tracing::info!(op = OP, user_id = %user_id, "Checking if user is admin");

        let is_admin = self
            .admin_checker
            .is_admin(user_id)
            .await
            .map_err(|e| match e {
                StorageError::UserNotFound => {
                    tracing::warn!(op = OP, user_id = %user_id, "User not found");
                    AuthError::UserNotFound
                }
                e => {
                    tracing::error!(
                        op = OP,
                        user_id = %user_id,
                        error = %e,
                        "Failed to check if user is admin"
                    );
                    AuthError::internal(OP, e)
                }
            })?;

        tracing::info!(op = OP, user_id = %user_id, is_admin, "Checked if user is admin");

        Ok(is_admin)
    }
}
