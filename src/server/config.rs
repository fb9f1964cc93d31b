use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

/// Secret used when `JWT_SECRET` is unset. Only suitable for local development.
pub const DEFAULT_JWT_SECRET: &str = "saferide-secret-key-2024";

const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";
const DEFAULT_BUSINESS_NAME: &str = "Fahrschule Saferide";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub token_ttl_hours: i64,

    /// Allowed CORS origins, empty allows any origin.
    pub cors_origins: Vec<String>,

    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    pub bind_address: String,
    /// Shown in PDF export titles.
    pub business_name: String,
    /// Password for the bootstrapped `admin` user, generated when unset.
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET is not set, using the insecure default secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        let cors_origins = match var("CORS_ORIGINS") {
            Some(origins) if origins.trim() != "*" => origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret,
            token_ttl_hours: parse_or(
                "TOKEN_TTL_HOURS",
                var("TOKEN_TTL_HOURS"),
                DEFAULT_TOKEN_TTL_HOURS,
            )?,
            cors_origins,
            upload_dir: var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                var("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            business_name: var("BUSINESS_NAME")
                .unwrap_or_else(|| DEFAULT_BUSINESS_NAME.to_string()),
            admin_password: var("ADMIN_PASSWORD"),
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.token_ttl_hours, 24);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.bind_address, "0.0.0.0:8001");
        assert_eq!(config.business_name, "Fahrschule Saferide");
        assert_eq!(config.max_upload_bytes, 26_214_400);
        assert_eq!(config.admin_password, None);
    }

    #[test]
    fn requires_database_url() {
        let result = config(&[]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    #[test]
    fn splits_cors_origins() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://localhost:3000, https://saferide.ch"),
        ])
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://saferide.ch"]
        );
    }

    #[test]
    fn rejects_unparseable_ttl() {
        let result = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TOKEN_TTL_HOURS", "one day"),
        ]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
