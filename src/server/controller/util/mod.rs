//! Utility functions for controller request handling.
//!
//! Bearer token extractors used by the protected endpoints.

pub mod auth;
