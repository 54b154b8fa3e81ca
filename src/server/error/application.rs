use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Candidate ID {candidate_id} already applied to listing ID {listing_id}")]
    AlreadyApplied { candidate_id: i32, listing_id: i32 },
    #[error("Application ID {0} not found")]
    NotFound(i32),
    #[error("Listing ID {0} not found")]
    ListingNotFound(i32),
    #[error("Company ID {company_id} does not own the listing of application ID {application_id}")]
    NotListingOwner {
        application_id: i32,
        company_id: i32,
    },
    #[error("Applications can only be moved to Approved or Rejected")]
    InvalidTargetStatus,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyApplied { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "You have already applied to this listing",
            ),
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Application not found"),
            Self::ListingNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Listing not found")
            }
            Self::NotListingOwner { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to update this application",
            ),
            Self::InvalidTargetStatus => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
