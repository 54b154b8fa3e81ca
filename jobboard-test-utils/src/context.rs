//! Test context structure and utilities.
//!
//! The context returned by `TestBuilder::build()`, wrapping an in-memory SQLite database
//! along with the identities queued on the builder.

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_job_board_tables()
///     .with_company("acme@example.com")
///     .build()
///     .await?;
///
/// let company = &test.companies[0];
/// let listing = test.listing().insert_listing(company.id, "Backend Developer").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Candidates queued with `TestBuilder::with_candidate`, in insertion order
    pub candidates: Vec<entity::candidate::Model>,
    /// Companies queued with `TestBuilder::with_company`, in insertion order
    pub companies: Vec<entity::company::Model>,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it and a
    /// token signing secret.
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main jobboard crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), TEST_JWT_SECRET.to_string()))
    }
}

impl TestContext {
    /// Create a new test context connected to a fresh in-memory database
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            candidates: Vec::new(),
            companies: Vec::new(),
        })
    }

    /// Execute CREATE TABLE statements in order
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Execute CREATE INDEX statements in order
    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
