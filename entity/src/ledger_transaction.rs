use sea_orm::entity::prelude::*;

/// A single income or expense booking.
///
/// `account_id` is intentionally not a foreign key: accounts can be deleted
/// without touching the transactions that were booked against them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ledger_transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: Date,
    pub description: String,
    /// `income` or `expense`
    pub entry_type: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub account_id: String,
    pub payment_method: Option<String>,
    pub remarks: Option<String>,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
