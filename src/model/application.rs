use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{identity::CandidateSummaryDto, listing::ListingDto};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ApplicationStatusDto {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplyDto {
    pub listing_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub status: ApplicationStatusDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub listing_id: i32,
    pub candidate_id: i32,
    pub status: ApplicationStatusDto,
    pub applied_at: NaiveDateTime,
    pub listing: ListingDto,
    /// Applicant contact details, omitted when the candidate lists their own applications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<CandidateSummaryDto>,
}
