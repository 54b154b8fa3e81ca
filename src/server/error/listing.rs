use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Listing ID {0} not found")]
    NotFound(i32),
    #[error("Company ID {company_id} does not own listing ID {listing_id}")]
    NotOwner { listing_id: i32, company_id: i32 },
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Listing not found"),
            Self::NotOwner { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this listing",
            ),
        }
    }
}
