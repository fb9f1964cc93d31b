use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000006_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerRemark::Table)
                    .if_not_exists()
                    .col(string(CustomerRemark::Id).primary_key())
                    .col(string(CustomerRemark::CustomerId))
                    .col(date(CustomerRemark::Date))
                    .col(text(CustomerRemark::Remarks))
                    .col(string_null(CustomerRemark::FileUrl))
                    .col(string(CustomerRemark::UserId))
                    .col(
                        timestamp_with_time_zone(CustomerRemark::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_remark_customer_id")
                            .from(CustomerRemark::Table, CustomerRemark::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerRemark::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerRemark {
    Table,
    Id,
    CustomerId,
    Date,
    Remarks,
    FileUrl,
    UserId,
    CreatedAt,
}
