use crate::{
    model::account::{AccountCategory, EntryType},
    server::{
        data::account::AccountRepository, error::AppError, model::account::UpsertAccountParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_ids;
mod get_all;
mod update;
