use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_candidate::Candidate, m20251101_000004_listing::Listing};

/// Authoritative guard against two applications for the same candidate & listing.
pub static IDX_APPLICATION_CANDIDATE_LISTING: &str = "idx-application-candidate_id-listing_id";
static IDX_APPLICATION_LISTING_ID: &str = "idx-application-listing_id";
static FK_APPLICATION_LISTING_ID: &str = "fk-application-listing_id";
static FK_APPLICATION_CANDIDATE_ID: &str = "fk-application-candidate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(integer(Application::ListingId))
                    .col(integer(Application::CandidateId))
                    .col(text(Application::Status))
                    .col(timestamp(Application::AppliedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_CANDIDATE_LISTING)
                    .table(Application::Table)
                    .col(Application::CandidateId)
                    .col(Application::ListingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_LISTING_ID)
                    .table(Application::Table)
                    .col(Application::ListingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_LISTING_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::ListingId)
                    .to_tbl(Listing::Table)
                    .to_col(Listing::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_CANDIDATE_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::CandidateId)
                    .to_tbl(Candidate::Table)
                    .to_col(Candidate::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_CANDIDATE_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_LISTING_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_LISTING_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_CANDIDATE_LISTING)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Application {
    Table,
    Id,
    ListingId,
    CandidateId,
    Status,
    AppliedAt,
}
