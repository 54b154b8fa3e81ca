use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ExistsDto},
        identity::{CandidateDto, CheckAddressDto, RegisterCandidateDto, UpdateCandidateDto},
    },
    server::{
        controller::util::auth::{require_owner, CandidateAuth},
        error::Error,
        model::app::AppState,
        service::{
            address::AddressService, auth::credential::CredentialService,
            candidate::CandidateService,
        },
    },
};

pub static CANDIDATE_TAG: &str = "candidate";

/// Register a candidate
#[utoipa::path(
    post,
    path = "/api/candidates",
    tag = CANDIDATE_TAG,
    request_body = RegisterCandidateDto,
    responses(
        (status = 201, description = "Candidate registered", body = CandidateDto),
        (status = 400, description = "Invalid fields or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_candidate(
    State(state): State<AppState>,
    Json(registration): Json<RegisterCandidateDto>,
) -> Result<impl IntoResponse, Error> {
    registration.validate()?;

    let candidate = CredentialService::new(&state.db, &state.tokens)
        .register_candidate(&registration)
        .await?;

    Ok((StatusCode::CREATED, Json(candidate)))
}

/// Update the authenticated candidate's profile and address
#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Candidate ID, must match the token")),
    request_body = UpdateCandidateDto,
    responses(
        (status = 200, description = "Candidate updated", body = CandidateDto),
        (status = 400, description = "Invalid fields or email already registered", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token does not belong to this candidate", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    CandidateAuth(candidate_id): CandidateAuth,
    Path(id): Path<i32>,
    Json(profile): Json<UpdateCandidateDto>,
) -> Result<impl IntoResponse, Error> {
    require_owner(candidate_id, id)?;
    profile.validate()?;

    let candidate = CandidateService::new(&state.db)
        .update_candidate(id, &profile)
        .await?;

    Ok((StatusCode::OK, Json(candidate)))
}

/// Check whether a candidate email is registered
#[utoipa::path(
    get,
    path = "/api/candidates/check-email/{email}",
    tag = CANDIDATE_TAG,
    params(("email" = String, Path, description = "Email to look up")),
    responses(
        (status = 200, description = "Lookup result", body = ExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_candidate_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let exists = CandidateService::new(&state.db).email_exists(&email).await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}

/// Check whether an address with the postal code & number is registered
#[utoipa::path(
    post,
    path = "/api/candidates/check-address",
    tag = CANDIDATE_TAG,
    request_body = CheckAddressDto,
    responses(
        (status = 200, description = "Lookup result", body = ExistsDto),
        (status = 400, description = "Malformed postal code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_candidate_address(
    State(state): State<AppState>,
    Json(address): Json<CheckAddressDto>,
) -> Result<impl IntoResponse, Error> {
    address.validate()?;

    let exists = AddressService::new(&state.db).check_address(&address).await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}
