use sea_orm_migration::{prelude::*, schema::*};

/// Creates the three monthly/document tables that only hold a date, some text
/// and an optional attached file.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankDocument::Table)
                    .if_not_exists()
                    .col(string(BankDocument::Id).primary_key())
                    .col(date(BankDocument::Date))
                    .col(string_len(BankDocument::Month, 7))
                    .col(string_null(BankDocument::FileUrl))
                    .col(string(BankDocument::UserId))
                    .col(
                        timestamp_with_time_zone(BankDocument::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MiscItem::Table)
                    .if_not_exists()
                    .col(string(MiscItem::Id).primary_key())
                    .col(date(MiscItem::Date))
                    .col(string_len(MiscItem::Month, 7))
                    .col(text(MiscItem::Remarks))
                    .col(string_null(MiscItem::FileUrl))
                    .col(string(MiscItem::UserId))
                    .col(
                        timestamp_with_time_zone(MiscItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ImportantUpload::Table)
                    .if_not_exists()
                    .col(string(ImportantUpload::Id).primary_key())
                    .col(date(ImportantUpload::Date))
                    .col(text(ImportantUpload::Description))
                    .col(string_null(ImportantUpload::FileUrl))
                    .col(string(ImportantUpload::UserId))
                    .col(
                        timestamp_with_time_zone(ImportantUpload::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImportantUpload::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MiscItem::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BankDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BankDocument {
    Table,
    Id,
    Date,
    Month,
    FileUrl,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum MiscItem {
    Table,
    Id,
    Date,
    Month,
    Remarks,
    FileUrl,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ImportantUpload {
    Table,
    Id,
    Date,
    Description,
    FileUrl,
    UserId,
    CreatedAt,
}
