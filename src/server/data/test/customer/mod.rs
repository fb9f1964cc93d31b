use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::server::{
    data::{customer::CustomerRepository, customer_remark::CustomerRemarkRepository},
    model::customer::CreateCustomerRemarkParam,
};
use test_utils::{builder::TestBuilder, factory, factory::customer::CustomerFactory};

mod get_all;
mod remarks;
