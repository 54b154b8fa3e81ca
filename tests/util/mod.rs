//! Shared helpers for the integration tests: application state from a test context, bearer
//! tokens for fixture identities, and a small client for driving the assembled router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use jobboard::{
    model::auth::IdentityKind,
    server::{model::app::AppState, startup::build_router},
};
use jobboard_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;

pub trait TestContextExt {
    /// Application state backed by the test database, signing with `TEST_JWT_SECRET`
    fn into_app_state(&self) -> AppState;

    /// Fully layered router backed by the test database
    fn router(&self) -> Router;

    /// Bearer token for the candidate at `index` in `test.candidates`
    fn candidate_token(&self, index: usize) -> String;

    /// Bearer token for the company at `index` in `test.companies`
    fn company_token(&self, index: usize) -> String;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn router(&self) -> Router {
        build_router(self.into_app_state())
    }

    fn candidate_token(&self, index: usize) -> String {
        let candidate = &self.candidates[index];

        self.into_app_state()
            .tokens
            .issue(candidate.id, IdentityKind::Candidate, &candidate.email, Utc::now())
            .expect("token is signed")
    }

    fn company_token(&self, index: usize) -> String {
        let company = &self.companies[index];

        self.into_app_state()
            .tokens
            .issue(company.id, IdentityKind::Company, &company.email, Utc::now())
            .expect("token is signed")
    }
}

/// Sends a request through the router and returns the status with the parsed JSON body
///
/// An empty body is returned as `Value::Null`.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("request is well formed");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };

    (status, body)
}

/// A valid address request body
pub fn address_body(postal_code: &str, number: i32) -> Value {
    serde_json::json!({
        "postal_code": postal_code,
        "street": "Rua das Flores",
        "number": number,
        "complement": null,
        "neighborhood": "Centro",
        "city": "Curitiba",
        "state": "pr"
    })
}

/// A valid candidate registration body
pub fn candidate_registration(email: &str) -> Value {
    serde_json::json!({
        "name": "Ana Souza",
        "email": email,
        "password": "secret123",
        "phone": "(41) 99999-0000",
        "resume": "Backend developer",
        "address": address_body("80010-000", 42)
    })
}

/// A valid company registration body
pub fn company_registration(email: &str, cnpj: &str) -> Value {
    serde_json::json!({
        "name": "Acme Tecnologia",
        "cnpj": cnpj,
        "email": email,
        "password": "secret123",
        "phone": null,
        "segment": "Software",
        "size_category": "Small",
        "address": address_body("80020-000", 7)
    })
}

/// A valid listing request body
pub fn listing_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "description": "Build and maintain the API",
        "requirements": "Rust, PostgreSQL",
        "salary": "R$ 10.000",
        "contract_type": "CLT",
        "modality": "Remote",
        "location": "Curitiba - PR",
        "skills": ["Rust", "SQL"],
        "benefits": ["Health plan"]
    })
}

/// Recursively checks for any object key that mentions a password
pub fn contains_password_field(value: &Value) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(key, value)| key.to_lowercase().contains("password") || contains_password_field(value)),
        Value::Array(items) => items.iter().any(contains_password_field),
        _ => false,
    }
}
