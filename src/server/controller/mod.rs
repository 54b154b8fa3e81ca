//! HTTP controller endpoints for the job board API.
//!
//! Axum handlers extract and validate requests, authenticate bearer tokens where required,
//! delegate to services, and map results to JSON responses. Every handler is annotated with
//! utoipa for the OpenAPI document served at `/api/docs`.

pub mod application;
pub mod auth;
pub mod candidate;
pub mod company;
pub mod listing;
pub mod util;
