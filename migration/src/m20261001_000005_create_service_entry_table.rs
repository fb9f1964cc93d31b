use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000004_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceEntry::Table)
                    .if_not_exists()
                    .col(string(ServiceEntry::Id).primary_key())
                    .col(string(ServiceEntry::VehicleId))
                    .col(date(ServiceEntry::Date))
                    .col(text(ServiceEntry::Description))
                    .col(big_integer_null(ServiceEntry::KmStand))
                    .col(string_null(ServiceEntry::FileUrl))
                    .col(string(ServiceEntry::UserId))
                    .col(
                        timestamp_with_time_zone(ServiceEntry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_entry_vehicle_id")
                            .from(ServiceEntry::Table, ServiceEntry::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceEntry {
    Table,
    Id,
    VehicleId,
    Date,
    Description,
    KmStand,
    FileUrl,
    UserId,
    CreatedAt,
}
