use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_address::Address;

static FK_COMPANY_ADDRESS_ID: &str = "fk-company-address_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string(Company::Name))
                    .col(string_len_uniq(Company::Cnpj, 14))
                    .col(string_uniq(Company::Email))
                    .col(string(Company::PasswordHash))
                    .col(string_null(Company::Phone))
                    .col(string(Company::Segment))
                    .col(string(Company::SizeCategory))
                    .col(integer_uniq(Company::AddressId))
                    .col(timestamp(Company::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPANY_ADDRESS_ID)
                    .from_tbl(Company::Table)
                    .from_col(Company::AddressId)
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
                    .name(FK_COMPANY_ADDRESS_ID)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    Cnpj,
    Email,
    PasswordHash,
    Phone,
    Segment,
    SizeCategory,
    AddressId,
    CreatedAt,
}
