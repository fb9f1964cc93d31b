use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(string(Vehicle::Id).primary_key())
                    .col(string(Vehicle::Marke))
                    .col(string(Vehicle::Modell))
                    .col(string(Vehicle::ChassisNr))
                    .col(string(Vehicle::FirstInv))
                    .col(big_integer(Vehicle::KmStand))
                    .col(string_null(Vehicle::Sommerreifen))
                    .col(string_null(Vehicle::Winterreifen))
                    .col(text_null(Vehicle::Notes))
                    .col(string_null(Vehicle::FileUrl))
                    .col(
                        timestamp_with_time_zone(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Marke,
    Modell,
    ChassisNr,
    FirstInv,
    KmStand,
    Sommerreifen,
    Winterreifen,
    Notes,
    FileUrl,
    CreatedAt,
}
