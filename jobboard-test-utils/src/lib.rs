//! Test harness for the job board server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and identities a test
//! needs, then `build()` returns a [`TestContext`] backed by an in-memory SQLite database with
//! fixture helpers for inserting further records.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}
