use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_company::Company;

static IDX_LISTING_COMPANY_ID: &str = "idx-listing-company_id";
static FK_LISTING_COMPANY_ID: &str = "fk-listing-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(integer(Listing::CompanyId))
                    .col(string(Listing::Title))
                    .col(text(Listing::Description))
                    .col(text(Listing::Requirements))
                    .col(string(Listing::Salary))
                    .col(text(Listing::ContractType))
                    .col(text(Listing::Modality))
                    .col(string(Listing::Location))
                    .col(json(Listing::Skills))
                    .col(json(Listing::Benefits))
                    .col(timestamp(Listing::PublishedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_COMPANY_ID)
                    .table(Listing::Table)
                    .col(Listing::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_COMPANY_ID)
                    .from_tbl(Listing::Table)
                    .from_col(Listing::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
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
                    .name(FK_LISTING_COMPANY_ID)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_COMPANY_ID)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    CompanyId,
    Title,
    Description,
    Requirements,
    Salary,
    ContractType,
    Modality,
    Location,
    Skills,
    Benefits,
    PublishedAt,
}
