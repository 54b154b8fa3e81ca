//! Shared values used by fixtures and tests.
//!
//! None of these are real credentials.

/// HMAC secret used to sign tokens in tests.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Plaintext password of every identity inserted by the fixtures.
pub static TEST_PASSWORD: &str = "password123";

/// CNPJ assigned to the first company inserted by the builder.
pub static TEST_CNPJ: &str = "11222333000181";
