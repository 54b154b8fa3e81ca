use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        listing::{ListingDto, ListingInputDto},
    },
    server::{
        controller::util::auth::CompanyAuth, error::Error, model::app::AppState,
        service::listing::ListingService,
    },
};

pub static LISTING_TAG: &str = "listing";

/// List every published listing, newest first
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "All listings with their company", body = Vec<ListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_listings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let listings = ListingService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Publish a listing as the authenticated company
#[utoipa::path(
    post,
    path = "/api/listings",
    tag = LISTING_TAG,
    security(("bearer_auth" = [])),
    request_body = ListingInputDto,
    responses(
        (status = 201, description = "Listing published", body = ListingDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token is invalid or not a company token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
    Json(listing): Json<ListingInputDto>,
) -> Result<impl IntoResponse, Error> {
    listing.validate()?;

    let listing = ListingService::new(&state.db)
        .create_listing(company_id, &listing)
        .await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// Retrieve a listing
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Listing with its company", body = ListingDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing = ListingService::new(&state.db).get_listing(id).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Replace a listing owned by the authenticated company
#[utoipa::path(
    put,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Listing ID")),
    request_body = ListingInputDto,
    responses(
        (status = 200, description = "Listing updated", body = ListingDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Listing belongs to another company", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
    Path(id): Path<i32>,
    Json(listing): Json<ListingInputDto>,
) -> Result<impl IntoResponse, Error> {
    listing.validate()?;

    let listing = ListingService::new(&state.db)
        .update_listing(company_id, id, &listing)
        .await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Delete a listing owned by the authenticated company along with its applications
#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Listing deleted", body = MessageDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Listing belongs to another company", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ListingService::new(&state.db)
        .delete_listing(company_id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Listing deleted".to_string(),
        }),
    ))
}

/// List the listings published by a company, newest first
#[utoipa::path(
    get,
    path = "/api/listings/company/{company_id}",
    tag = LISTING_TAG,
    params(("company_id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Listings of the company", body = Vec<ListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_company_listings(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listings = ListingService::new(&state.db)
        .list_by_company(company_id)
        .await?;

    Ok((StatusCode::OK, Json(listings)))
}
