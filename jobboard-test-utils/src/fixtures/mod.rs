//! Fixture helpers for inserting records during test execution.
//!
//! - `identity` - addresses, candidates and companies
//! - `listing` - job listings owned by companies
//! - `application` - candidate applications with a chosen status

pub mod application;
pub mod identity;
pub mod listing;
