//! Declarative test builder.
//!
//! Tables and identities are queued on the builder and created in one go by `build()`.

use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{constant::TEST_CNPJ, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_job_board_tables: bool,

    candidates: Vec<String>,
    companies: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing queued
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_job_board_tables: false,
            candidates: Vec::new(),
            companies: Vec::new(),
        }
    }

    /// Add every job board table to the test database.
    ///
    /// Creates the address, candidate, company, listing and application tables along with the
    /// unique index on application (candidate_id, listing_id).
    pub fn with_job_board_tables(mut self) -> Self {
        self.include_job_board_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jobboard_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), jobboard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Address)
    ///     .with_table(Candidate)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a candidate with the provided email, available as `test.candidates`
    pub fn with_candidate(mut self, email: impl Into<String>) -> Self {
        self.candidates.push(email.into());
        self
    }

    /// Insert a company with the provided email, available as `test.companies`
    ///
    /// Each queued company receives a distinct CNPJ derived from [`TEST_CNPJ`].
    pub fn with_company(mut self, email: impl Into<String>) -> Self {
        self.companies.push(email.into());
        self
    }

    /// Build the test context by creating all configured tables and identities.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (job board tables if specified, then custom tables)
    /// 2. Creates the application uniqueness index when job board tables are included
    /// 3. Inserts queued candidates then companies
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_job_board_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Address),
                schema.create_table_from_entity(entity::prelude::Candidate),
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::Listing),
                schema.create_table_from_entity(entity::prelude::Application),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        // 2. Create indexes the entities cannot express
        if self.include_job_board_tables {
            context
                .with_indexes(vec![Index::create()
                    .name(migration::IDX_APPLICATION_CANDIDATE_LISTING)
                    .table(entity::application::Entity)
                    .col(entity::application::Column::CandidateId)
                    .col(entity::application::Column::ListingId)
                    .unique()
                    .to_owned()])
                .await?;
        }

        // 3. Insert queued identities
        let mut candidates = Vec::new();
        for email in &self.candidates {
            candidates.push(context.identity().insert_candidate(email).await?);
        }

        let mut companies = Vec::new();
        for (offset, email) in self.companies.iter().enumerate() {
            let cnpj = offset_cnpj(offset);
            companies.push(context.identity().insert_company(email, &cnpj).await?);
        }

        context.candidates = candidates;
        context.companies = companies;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces the last digits of [`TEST_CNPJ`] so every queued company is unique
fn offset_cnpj(offset: usize) -> String {
    let suffix = format!("{:02}", offset % 100);
    format!("{}{}", &TEST_CNPJ[..12], suffix)
}
