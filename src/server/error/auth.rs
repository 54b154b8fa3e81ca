use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Message shared by every failed login so callers cannot tell which half was wrong
pub static INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{INVALID_CREDENTIALS_MESSAGE}")]
    InvalidCredentials,
    #[error("Missing or malformed bearer token")]
    Unauthenticated,
    #[error("Bearer token is invalid or expired")]
    InvalidToken,
    #[error("Bearer token does not belong to the identity kind required by this route")]
    WrongIdentityKind,
    #[error("Identity {subject} attempted to act on resource owned by {owner}")]
    NotResourceOwner { subject: i32, owner: i32 },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS_MESSAGE)
            }
            Self::Unauthenticated => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidToken => error_response(StatusCode::FORBIDDEN, "Invalid or expired token"),
            Self::WrongIdentityKind | Self::NotResourceOwner { .. } => {
                error_response(StatusCode::FORBIDDEN, "Access denied")
            }
        }
    }
}
