//! Field formats shared by the request DTOs.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

/// Brazilian postal code (CEP), `00000-000`
pub static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("postal code pattern is valid"));

/// Mobile phone number, `(00) 00000-0000`
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("phone pattern is valid"));

/// Two letter state abbreviation
pub static STATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("state pattern is valid"));

/// Strips the usual CNPJ punctuation (`00.000.000/0000-00`) leaving only the digits
pub fn normalize_cnpj(cnpj: &str) -> String {
    cnpj.chars()
        .filter(|c| !matches!(c, '.' | '/' | '-' | ' '))
        .collect()
}

/// A CNPJ is valid when it is exactly 14 digits once punctuation is removed
pub fn validate_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    let digits = normalize_cnpj(cnpj);

    if digits.len() == 14 && digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }

    Err(ValidationError::new("cnpj").with_message("CNPJ must contain exactly 14 digits".into()))
}
