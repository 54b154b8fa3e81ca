//! Error types for the job board server.
//!
//! Each domain (authentication, identities, listings, applications, configuration) has its own
//! error enum implementing `IntoResponse`. The top-level [`Error`] aggregates them together with
//! the library errors that can surface from storage, hashing and token signing, so handlers can
//! propagate everything with `?`.

pub mod application;
pub mod auth;
pub mod config;
pub mod identity;
pub mod listing;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        application::ApplicationError, auth::AuthError, config::ConfigError,
        identity::IdentityError, listing::ListingError,
    },
};

/// Main error type for the job board server.
///
/// Domain errors carry their own HTTP mapping, request body validation failures map to
/// 400 Bad Request, and everything else is treated as an internal error which is logged
/// and answered with a generic 500 body.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Candidate or company registration and lookup failures.
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Listing lookup and ownership failures.
    #[error(transparent)]
    ListingError(#[from] ListingError),
    /// Application workflow failures.
    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),
    /// Request body failed field validation.
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    /// Password hashing or hash parsing failed.
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Token signing failed.
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            Self::ListingError(err) => err.into_response(),
            Self::ApplicationError(err) => err.into_response(),
            Self::ValidationError(err) => validation::into_response(&err),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Returns the driver message when the error is a unique constraint violation
pub fn unique_violation(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => Some(message),
        _ => None,
    }
}
