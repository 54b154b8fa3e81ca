use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::identity::{CandidateDto, CompanyDto};

/// The two disjoint kinds of principal a bearer token can assert
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    Candidate,
    Company,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CandidateLoginDto {
    pub token: String,
    pub candidate: CandidateDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyLoginDto {
    pub token: String,
    pub company: CompanyDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CandidateMeDto {
    pub candidate: CandidateDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyMeDto {
    pub company: CompanyDto,
}
