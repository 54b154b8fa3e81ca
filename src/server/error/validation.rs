//! Conversion of `validator` failures into 400 responses.

use axum::{http::StatusCode, response::Response};
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::server::error::error_response;

pub(super) fn into_response(errors: &ValidationErrors) -> Response {
    let message = describe(errors);
    tracing::debug!(%message, "Rejected request body");

    error_response(StatusCode::BAD_REQUEST, message)
}

/// Flattens validation errors into a stable `field: message` list, nested fields dotted
pub fn describe(errors: &ValidationErrors) -> String {
    let mut lines = Vec::new();
    collect(errors, "", &mut lines);
    lines.sort();

    lines.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, lines: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid ({})", error.code));

                    lines.push(format!("{}: {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, lines),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), lines);
                }
            }
        }
    }
}
