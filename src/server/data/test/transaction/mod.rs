use chrono::NaiveDate;

use crate::{
    model::{account::EntryType, transaction::PaymentMethod},
    server::{
        data::transaction::TransactionRepository,
        error::AppError,
        model::{
            period::DateRange,
            transaction::{TransactionFilter, UpsertTransactionParam},
        },
    },
};
use test_utils::{builder::TestBuilder, factory, factory::transaction::TransactionFactory};

mod list;
mod set_file_url;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
