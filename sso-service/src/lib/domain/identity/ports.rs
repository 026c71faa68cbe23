use async_trait::async_trait;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::StorageError;
use crate::domain::identity::models::App;
use crate::domain::identity::models::AppId;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Verify credentials and issue a session token for one application.
    ///
    /// # Arguments
    /// * `command` - Validated email, plaintext password, and application ID
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password, or unknown application
    /// * `Internal` - Storage or signing failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Report whether a user has administrator privileges.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this ID
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persists new users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Store a user with the given email and password hash.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn save_user(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<UserId, StorageError>;
}

/// Looks users up by email.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Storage operation failed
    async fn user(&self, email: &EmailAddress) -> Result<User, StorageError>;
}

/// Reads the administrator flag of a user.
#[async_trait]
pub trait AdminChecker: Send + Sync + 'static {
    /// # Errors
    /// * `UserNotFound` - No user with this ID
    /// * `Database` - Storage operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Looks applications up by ID.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// # Errors
    /// * `AppNotFound` - No application with this ID
    /// * `Database` - Storage operation failed
    async fn app(&self, app_id: AppId) -> Result<App, StorageError>;
}
