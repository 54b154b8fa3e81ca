use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDto, ApplyDto, UpdateStatusDto},
    },
    server::{
        controller::util::auth::{CandidateAuth, CompanyAuth},
        error::Error,
        model::app::AppState,
        service::application::ApplicationService,
    },
};

pub static APPLICATION_TAG: &str = "application";

/// Apply to a listing as the authenticated candidate
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    security(("bearer_auth" = [])),
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application created as pending", body = ApplicationDto),
        (status = 400, description = "Candidate already applied to the listing", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token is invalid or not a candidate token", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    CandidateAuth(candidate_id): CandidateAuth,
    Json(payload): Json<ApplyDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db)
        .apply(candidate_id, payload.listing_id)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// List the authenticated candidate's applications
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applications with their listing", body = Vec<ApplicationDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token is invalid or not a candidate token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(
    State(state): State<AppState>,
    CandidateAuth(candidate_id): CandidateAuth,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db)
        .list_for_candidate(candidate_id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Approve or reject an application to one of the company's listings
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Application with its new status", body = ApplicationDto),
        (status = 400, description = "Target status is not approved or rejected", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Listing belongs to another company", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db)
        .set_status(company_id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(application)))
}
