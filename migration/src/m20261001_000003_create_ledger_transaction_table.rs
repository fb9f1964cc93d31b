use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on account_id, deleting an account keeps its bookings
        manager
            .create_table(
                Table::create()
                    .table(LedgerTransaction::Table)
                    .if_not_exists()
                    .col(string(LedgerTransaction::Id).primary_key())
                    .col(date(LedgerTransaction::Date))
                    .col(string(LedgerTransaction::Description))
                    .col(string(LedgerTransaction::EntryType))
                    .col(double(LedgerTransaction::Amount))
                    .col(string(LedgerTransaction::AccountId))
                    .col(string_null(LedgerTransaction::PaymentMethod))
                    .col(text_null(LedgerTransaction::Remarks))
                    .col(string_null(LedgerTransaction::FileUrl))
                    .col(string(LedgerTransaction::UserId))
                    .col(
                        timestamp_with_time_zone(LedgerTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ledger_transaction_date")
                    .table(LedgerTransaction::Table)
                    .col(LedgerTransaction::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LedgerTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LedgerTransaction {
    Table,
    Id,
    Date,
    Description,
    EntryType,
    Amount,
    AccountId,
    PaymentMethod,
    Remarks,
    FileUrl,
    UserId,
    CreatedAt,
}
