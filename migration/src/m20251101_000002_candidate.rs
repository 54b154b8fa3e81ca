use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_address::Address;

static FK_CANDIDATE_ADDRESS_ID: &str = "fk-candidate-address_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(string(Candidate::Name))
                    .col(string_uniq(Candidate::Email))
                    .col(string(Candidate::PasswordHash))
                    .col(string_null(Candidate::Phone))
                    .col(string_null(Candidate::Resume))
                    .col(integer_uniq(Candidate::AddressId))
                    .col(timestamp(Candidate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_ADDRESS_ID)
                    .from_tbl(Candidate::Table)
                    .from_col(Candidate::AddressId)
                    .to_tbl(Address::Table)
                    .to_col(Address::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CANDIDATE_ADDRESS_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Candidate {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Resume,
    AddressId,
    CreatedAt,
}
