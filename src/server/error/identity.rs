use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Email is already registered")]
    DuplicateEmail,
    #[error("CNPJ is already registered")]
    DuplicateTaxId,
    #[error("Candidate ID {0} not found")]
    CandidateNotFound(i32),
    #[error("Company ID {0} not found")]
    CompanyNotFound(i32),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::DuplicateEmail | Self::DuplicateTaxId => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::CandidateNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Candidate not found")
            }
            Self::CompanyNotFound(_) => error_response(StatusCode::NOT_FOUND, "Company not found"),
        }
    }
}
