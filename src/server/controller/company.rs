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
        application::ApplicationDto,
        identity::{CheckAddressDto, CompanyDto, RegisterCompanyDto, UpdateCompanyDto},
    },
    server::{
        controller::util::auth::{require_owner, CompanyAuth},
        error::Error,
        model::app::AppState,
        service::{
            address::AddressService, application::ApplicationService,
            auth::credential::CredentialService, company::CompanyService,
        },
    },
};

pub static COMPANY_TAG: &str = "company";

/// Register a company
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = RegisterCompanyDto,
    responses(
        (status = 201, description = "Company registered", body = CompanyDto),
        (status = 400, description = "Invalid fields, email or CNPJ already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_company(
    State(state): State<AppState>,
    Json(registration): Json<RegisterCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    registration.validate()?;

    let company = CredentialService::new(&state.db, &state.tokens)
        .register_company(&registration)
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

/// Update the authenticated company's profile and address
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Company ID, must match the token")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = CompanyDto),
        (status = 400, description = "Invalid fields or email already registered", body = ErrorDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token does not belong to this company", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
    Path(id): Path<i32>,
    Json(profile): Json<UpdateCompanyDto>,
) -> Result<impl IntoResponse, Error> {
    require_owner(company_id, id)?;
    profile.validate()?;

    let company = CompanyService::new(&state.db)
        .update_company(id, &profile)
        .await?;

    Ok((StatusCode::OK, Json(company)))
}

/// Check whether a company email is registered
#[utoipa::path(
    get,
    path = "/api/companies/check-email/{email}",
    tag = COMPANY_TAG,
    params(("email" = String, Path, description = "Email to look up")),
    responses(
        (status = 200, description = "Lookup result", body = ExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_company_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let exists = CompanyService::new(&state.db).email_exists(&email).await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}

/// Check whether a CNPJ is registered
#[utoipa::path(
    get,
    path = "/api/companies/check-cnpj/{cnpj}",
    tag = COMPANY_TAG,
    params(("cnpj" = String, Path, description = "CNPJ digits, punctuation is ignored")),
    responses(
        (status = 200, description = "Lookup result", body = ExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_company_cnpj(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let exists = CompanyService::new(&state.db).cnpj_exists(&cnpj).await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}

/// Check whether an address with the postal code & number is registered
#[utoipa::path(
    post,
    path = "/api/companies/check-address",
    tag = COMPANY_TAG,
    request_body = CheckAddressDto,
    responses(
        (status = 200, description = "Lookup result", body = ExistsDto),
        (status = 400, description = "Malformed postal code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_company_address(
    State(state): State<AppState>,
    Json(address): Json<CheckAddressDto>,
) -> Result<impl IntoResponse, Error> {
    address.validate()?;

    let exists = AddressService::new(&state.db).check_address(&address).await?;

    Ok((StatusCode::OK, Json(ExistsDto { exists })))
}

/// List the applications received by the company's listings
#[utoipa::path(
    get,
    path = "/api/companies/{id}/candidates",
    tag = COMPANY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Company ID, must match the token")),
    responses(
        (status = 200, description = "Applications with listing and applicant", body = Vec<ApplicationDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Token does not belong to this company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company_candidates(
    State(state): State<AppState>,
    CompanyAuth(company_id): CompanyAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db)
        .list_for_company(company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}
