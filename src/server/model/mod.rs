//! Server application models and type definitions.
//!
//! Application state shared by handlers, the identity asserted by a verified bearer token,
//! and type aliases for the SeaORM entity models.

pub mod app;
pub mod auth;
pub mod db;
