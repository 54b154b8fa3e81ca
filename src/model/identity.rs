use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validate::{validate_cnpj, PHONE_REGEX, POSTAL_CODE_REGEX, STATE_REGEX};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressDto {
    pub id: i32,
    pub postal_code: String,
    pub street: String,
    pub number: i32,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Address fields supplied on registration and profile updates
#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressInputDto {
    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Postal code must use the format 00000-000"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(range(min = 1, message = "Address number must be positive"))]
    pub number: i32,
    #[serde(default)]
    pub complement: Option<String>,
    #[validate(length(min = 1, message = "Neighborhood is required"))]
    pub neighborhood: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(regex(path = *STATE_REGEX, message = "State must be a two letter abbreviation"))]
    pub state: String,
}

/// Body of the address availability checks
#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckAddressDto {
    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Postal code must use the format 00000-000"))]
    pub postal_code: String,
    pub number: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CandidateDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume: Option<String>,
    pub address: AddressDto,
    pub created_at: NaiveDateTime,
}

/// Candidate contact details shown to companies reviewing applications
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CandidateSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterCandidateDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must use the format (00) 00000-0000"))]
    pub phone: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[validate(nested)]
    pub address: AddressInputDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCandidateDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must use the format (00) 00000-0000"))]
    pub phone: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[validate(nested)]
    pub address: AddressInputDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub cnpj: String,
    pub email: String,
    pub phone: Option<String>,
    pub segment: String,
    pub size_category: String,
    pub address: AddressDto,
    pub created_at: NaiveDateTime,
}

/// Company details embedded in listings
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanySummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub segment: String,
    pub size_category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterCompanyDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_cnpj"))]
    pub cnpj: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must use the format (00) 00000-0000"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Segment is required"))]
    pub segment: String,
    #[validate(length(min = 1, message = "Company size is required"))]
    pub size_category: String,
    #[validate(nested)]
    pub address: AddressInputDto,
}

/// Company profile update, the CNPJ cannot be changed
#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Phone must use the format (00) 00000-0000"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Segment is required"))]
    pub segment: String,
    #[validate(length(min = 1, message = "Company size is required"))]
    pub size_category: String,
    #[validate(nested)]
    pub address: AddressInputDto,
}
