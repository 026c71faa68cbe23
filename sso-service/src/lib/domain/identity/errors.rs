use std::fmt;

use thiserror::Error;

/// Error for UserId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("user_id is required")]
    Missing,
}

/// Error for AppId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppIdError {
    #[error("app_id is required")]
    Missing,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
}

/// Outcome reported by the credential store.
///
/// Only the capability ports speak this type; `AuthService` translates every
/// variant into an `AuthError` before returning.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("App not found")]
    AppNotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Domain error for authentication operations.
///
/// Callers match on the variant; the display text is not part of the contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user, wrong password, or unknown application during login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("{op}: {message}")]
    Internal { op: &'static str, message: String },
}

impl AuthError {
    /// Wrap any failure as `Internal`, tagged with the operation it came from.
    pub fn internal(op: &'static str, err: impl fmt::Display) -> Self {
        AuthError::Internal {
            op,
            message: err.to_string(),
        }
    }
}
