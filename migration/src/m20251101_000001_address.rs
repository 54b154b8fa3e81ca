use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(string(Address::PostalCode))
                    .col(string(Address::Street))
                    .col(integer(Address::Number))
                    .col(string_null(Address::Complement))
                    .col(string(Address::Neighborhood))
                    .col(string(Address::City))
                    .col(string(Address::State))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    PostalCode,
    Street,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
}
