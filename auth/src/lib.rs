//! Authentication utilities library
//!
//! Provides the credential primitives behind the SSO service:
//! - Password hashing (Argon2id, fixed cost)
//! - Session token signing and validation (HS256 JWT, one secret per application)
//! - Authentication coordination with a fixed token lifetime
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(Duration::hours(1));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify, then sign with the application's secret
//! auth.verify_password("password123", &hash).unwrap();
//! let result = auth
//!     .issue_token(1, 1, "alice@example.com", b"app-secret")
//!     .unwrap();
//!
//! let claims = auth.validate_token(&result.access_token, b"app-secret").unwrap();
//! assert_eq!(claims.user_id, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
