use crate::{model::auth::Role, server::data::user::UserRepository, server::error::AppError};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
mod find_by_username;
mod get_all;
