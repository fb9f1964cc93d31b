use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::server::{
    data::{service_entry::ServiceEntryRepository, vehicle::VehicleRepository},
    model::vehicle::UpsertServiceEntryParam,
};
use test_utils::{builder::TestBuilder, factory, factory::vehicle::VehicleFactory};

mod get_by_vehicle;
