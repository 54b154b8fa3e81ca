use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Response of the availability checks for email, CNPJ and address
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExistsDto {
    pub exists: bool,
}

/// Plain acknowledgement message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
