//! Request and response types of the HTTP API.
//!
//! These are the JSON shapes exchanged with clients. Identity DTOs never carry
//! a password or password hash field.

pub mod api;
pub mod application;
pub mod auth;
pub mod identity;
pub mod listing;
pub mod validate;
