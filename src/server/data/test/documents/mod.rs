use chrono::NaiveDate;

use crate::server::{
    data::{bank_document::BankDocumentRepository, misc_item::MiscItemRepository},
    error::AppError,
    model::{
        document::{CreateBankDocumentParam, UpsertMiscItemParam},
        period::YearMonth,
    },
};
use test_utils::builder::TestBuilder;

mod get_by_month;
