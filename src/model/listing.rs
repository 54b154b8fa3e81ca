use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::identity::CompanySummaryDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ContractTypeDto {
    #[serde(rename = "CLT")]
    Clt,
    #[serde(rename = "PJ")]
    Pj,
    Temporary,
    Internship,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ModalityDto {
    OnSite,
    Remote,
    Hybrid,
}

/// Fields a company supplies when creating or editing a listing
#[derive(Clone, Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ListingInputDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Requirements are required"))]
    pub requirements: String,
    pub salary: String,
    pub contract_type: ContractTypeDto,
    pub modality: ModalityDto,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: String,
    pub contract_type: ContractTypeDto,
    pub modality: ModalityDto,
    pub location: String,
    pub skills: Vec<String>,
    pub benefits: Vec<String>,
    pub published_at: NaiveDateTime,
    /// Owning company, present on read endpoints that join it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanySummaryDto>,
}
