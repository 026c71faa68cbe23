use thiserror::Error;
use tonic::Status;

use crate::domain::identity::errors::AppIdError;
use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::EmailError;
use crate::domain::identity::errors::PasswordError;
use crate::domain::identity::errors::UserIdError;

pub mod is_admin;
pub mod login;
pub mod register;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::invalid_argument("invalid credentials"),
            AuthError::UserExists => Status::already_exists("user already exists"),
            AuthError::UserNotFound => Status::not_found("user not found"),
            AuthError::Internal { .. } => Status::internal("internal error"),
        }
    }
}

/// Request shape violations, rejected before the domain service is called.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseRequestError {
    #[error("both email and password are required")]
    MissingCredentials,

    #[error("invalid email")]
    InvalidEmail(#[source] EmailError),

    #[error(transparent)]
    AppId(#[from] AppIdError),

    #[error(transparent)]
    UserId(#[from] UserIdError),
}

impl From<EmailError> for ParseRequestError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Missing => ParseRequestError::MissingCredentials,
            EmailError::InvalidFormat(_) => ParseRequestError::InvalidEmail(err),
        }
    }
}

impl From<PasswordError> for ParseRequestError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::Missing => ParseRequestError::MissingCredentials,
        }
    }
}

impl From<ParseRequestError> for Status {
    fn from(err: ParseRequestError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}
