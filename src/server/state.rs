//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup from the loaded `Config` and cloned into
//! each handler through Axum's state extraction.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::token::TokenService};

/// Shared resources available to every request handler.
///
/// All fields are cheap to clone: the connection is a pool handle and the rest sit
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub tokens: Arc<TokenService>,

    /// Directory uploaded files are written to and served from.
    pub upload_dir: Arc<PathBuf>,

    /// Shown in PDF export titles.
    pub business_name: Arc<str>,
}

impl AppState {
    /// Creates the application state from configuration and a connected database.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `config` - Loaded application configuration
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl_hours)),
            upload_dir: Arc::new(config.upload_dir.clone()),
            business_name: Arc::from(config.business_name.as_str()),
        }
    }
}
