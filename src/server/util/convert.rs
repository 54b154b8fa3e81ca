//! Conversions between entity models and wire types.

use entity::{
    application::ApplicationStatus,
    listing::{ContractType, Modality},
};
use serde_json::Value;

use crate::model::{
    application::ApplicationStatusDto,
    listing::{ContractTypeDto, ModalityDto},
};

impl From<ContractTypeDto> for ContractType {
    fn from(value: ContractTypeDto) -> Self {
        match value {
            ContractTypeDto::Clt => Self::Clt,
            ContractTypeDto::Pj => Self::Pj,
            ContractTypeDto::Temporary => Self::Temporary,
            ContractTypeDto::Internship => Self::Internship,
        }
    }
}

impl From<ContractType> for ContractTypeDto {
    fn from(value: ContractType) -> Self {
        match value {
            ContractType::Clt => Self::Clt,
            ContractType::Pj => Self::Pj,
            ContractType::Temporary => Self::Temporary,
            ContractType::Internship => Self::Internship,
        }
    }
}

impl From<ModalityDto> for Modality {
    fn from(value: ModalityDto) -> Self {
        match value {
            ModalityDto::OnSite => Self::OnSite,
            ModalityDto::Remote => Self::Remote,
            ModalityDto::Hybrid => Self::Hybrid,
        }
    }
}

impl From<Modality> for ModalityDto {
    fn from(value: Modality) -> Self {
        match value {
            Modality::OnSite => Self::OnSite,
            Modality::Remote => Self::Remote,
            Modality::Hybrid => Self::Hybrid,
        }
    }
}

impl From<ApplicationStatusDto> for ApplicationStatus {
    fn from(value: ApplicationStatusDto) -> Self {
        match value {
            ApplicationStatusDto::Pending => Self::Pending,
            ApplicationStatusDto::Approved => Self::Approved,
            ApplicationStatusDto::Rejected => Self::Rejected,
        }
    }
}

impl From<ApplicationStatus> for ApplicationStatusDto {
    fn from(value: ApplicationStatus) -> Self {
        match value {
            ApplicationStatus::Pending => Self::Pending,
            ApplicationStatus::Approved => Self::Approved,
            ApplicationStatus::Rejected => Self::Rejected,
        }
    }
}

/// Reads a stored JSON array of strings, skipping any non-string element
pub fn json_strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
