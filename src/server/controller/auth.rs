use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{CandidateLoginDto, CandidateMeDto, CompanyLoginDto, CompanyMeDto, LoginDto},
    },
    server::{
        controller::util::auth::{CandidateAuth, CompanyAuth},
        error::Error,
        model::app::AppState,
        service::{
            auth::credential::CredentialService, candidate::CandidateService,
            company::CompanyService,
        },
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in as a candidate
///
/// Exchanges email & password for a bearer token valid for 24 hours by default.
#[utoipa::path(
    post,
    path = "/api/auth/candidate/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = CandidateLoginDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn candidate_login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    credentials.validate()?;

    let login = CredentialService::new(&state.db, &state.tokens)
        .login_candidate(&credentials, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(login)))
}

/// Log in as a company
#[utoipa::path(
    post,
    path = "/api/auth/company/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = CompanyLoginDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn company_login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    credentials.validate()?;

    let login = CredentialService::new(&state.db, &state.tokens)
        .login_company(&credentials, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(login)))
}

/// Get the authenticated candidate
#[utoipa::path(
    get,
    path = "/api/auth/candidate/me",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated candidate", body = CandidateMeDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid token or not a candidate token", body = ErrorDto),
        (status = 404, description = "Candidate no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn candidate_me(
    State(state): State<AppState>,
    CandidateAuth(candidate_id): CandidateAuth,
) -> Result<impl IntoResponse, Error> {
    let candidate = CandidateService::new(&state.db)
        .get_candidate(candidate_id)
        .await?;

    Ok((StatusCode::OK, Json(CandidateMeDto { candidate })))
}

/// Get the authenticated company
#[utoipa::path(
    get,
    path = "/api/auth/company/me",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated company", body = CompanyMeDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Invalid token or not a company token", body = ErrorDto),
        (status = 404, description = "Company no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn company_me(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
) -> Result<impl IntoResponse, Error> {
    let company = CompanyService::new(&state.db)
        .get_company(company_id)
        .await?;

    Ok((StatusCode::OK, Json(CompanyMeDto { company })))
}
