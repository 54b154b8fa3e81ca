//! Tests for HTTP controller endpoints.
//!
//! Handlers are either called directly with their extractors or driven through the fully
//! layered router, verifying status codes, response bodies and authorization rules.

mod application;
mod auth;
mod listing;

use axum::http::{Method, StatusCode};
use jobboard_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, TestContextExt};
