//! Utility functions and helpers for server operations.
//!
//! Conversions between the SeaORM entity enums and their wire counterparts, and decoding of
//! the JSON string arrays stored on listings.

pub mod convert;
