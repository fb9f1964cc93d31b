use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(string(Customer::Id).primary_key())
                    .col(string(Customer::Name))
                    .col(string(Customer::Vorname))
                    .col(string(Customer::Strasse))
                    .col(string(Customer::Plz))
                    .col(string(Customer::Ort))
                    .col(string(Customer::Telefon))
                    .col(string(Customer::Email))
                    .col(boolean(Customer::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Customer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Name,
    Vorname,
    Strasse,
    Plz,
    Ort,
    Telefon,
    Email,
    Active,
    CreatedAt,
}
