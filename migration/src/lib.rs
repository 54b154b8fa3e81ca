pub use sea_orm_migration::prelude::*;

mod m20251101_000001_address;
mod m20251101_000002_candidate;
mod m20251101_000003_company;
mod m20251101_000004_listing;
mod m20251101_000005_application;

pub use m20251101_000005_application::IDX_APPLICATION_CANDIDATE_LISTING;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_address::Migration),
            Box::new(m20251101_000002_candidate::Migration),
            Box::new(m20251101_000003_company::Migration),
            Box::new(m20251101_000004_listing::Migration),
            Box::new(m20251101_000005_application::Migration),
        ]
    }
}
