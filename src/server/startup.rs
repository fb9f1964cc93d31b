use axum::http::HeaderValue;
use rand::Rng;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    model::{
        account::{AccountCategory, EntryType},
        auth::Role,
    },
    server::{
        config::Config,
        data::{account::AccountRepository, user::UserRepository},
        error::AppError,
        model::account::UpsertAccountParam,
        service::auth::password::hash_password,
    },
};

/// Username of the bootstrapped admin.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

const GENERATED_PASSWORD_LEN: usize = 16;

/// Accounts seeded on startup when no account with the same name exists.
const DEFAULT_ACCOUNTS: [(&str, EntryType, Option<AccountCategory>); 5] = [
    (
        "Einnahmen Fahrstunden",
        EntryType::Income,
        Some(AccountCategory::DrivingLessons),
    ),
    ("Einnahmen Theorie", EntryType::Income, None),
    ("Ausgaben Leasing", EntryType::Expense, None),
    ("Ausgaben Miete", EntryType::Expense, None),
    ("Ausgaben Benzin", EntryType::Expense, None),
];

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// First-run setup: creates the admin and, only then, the default accounts.
///
/// Once an admin exists this does nothing, so accounts deleted later stay deleted.
///
/// # Returns
/// - `Ok(true)` - Admin and default accounts were created
/// - `Ok(false)` - Already set up
pub async fn bootstrap(
    db: &DatabaseConnection,
    admin_password: Option<&str>,
) -> Result<bool, AppError> {
    if !bootstrap_admin(db, admin_password).await? {
        return Ok(false);
    }

    seed_default_accounts(db).await?;

    Ok(true)
}

/// Creates the `admin` user if no admin exists yet.
///
/// Uses `ADMIN_PASSWORD` when configured, otherwise generates a password and logs it
/// once.
///
/// # Returns
/// - `Ok(true)` - Admin was created
/// - `Ok(false)` - An admin already exists
pub async fn bootstrap_admin(
    db: &DatabaseConnection,
    admin_password: Option<&str>,
) -> Result<bool, AppError> {
    let repo = UserRepository::new(db);

    if repo.admin_exists().await? {
        return Ok(false);
    }

    if repo.find_by_username(DEFAULT_ADMIN_USERNAME).await?.is_some() {
        tracing::warn!(
            "No admin exists but username '{}' is taken by a regular user, skipping admin bootstrap",
            DEFAULT_ADMIN_USERNAME
        );
        return Ok(false);
    }

    let password = match admin_password {
        Some(password) => password.to_string(),
        None => {
            let generated = generate_password();
            tracing::info!(
                "Generated password for '{}': {}",
                DEFAULT_ADMIN_USERNAME,
                generated
            );
            generated
        }
    };

    let hash = hash_password(&password)?;
    repo.create(DEFAULT_ADMIN_USERNAME.to_string(), hash, Role::Admin)
        .await?;

    tracing::info!("Created admin user '{}'", DEFAULT_ADMIN_USERNAME);

    Ok(true)
}

/// Seeds the default accounts that are missing by name.
///
/// # Returns
/// - `Ok(usize)` - Number of accounts created
pub async fn seed_default_accounts(db: &DatabaseConnection) -> Result<usize, AppError> {
    let repo = AccountRepository::new(db);
    let mut created = 0;

    for (name, account_type, category) in DEFAULT_ACCOUNTS {
        if repo.find_by_name(name).await?.is_some() {
            continue;
        }

        repo.create(UpsertAccountParam {
            name: name.to_string(),
            account_type,
            category: Some(category),
        })
        .await?;
        created += 1;
    }

    if created > 0 {
        tracing::info!("Seeded {} default accounts", created);
    }

    Ok(created)
}

/// Builds the CORS layer from the configured origins.
///
/// An empty origin list allows any origin. Origins that are not valid header values
/// are skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..GENERATED_PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::server::service::auth::{token::TokenService, AuthService};

    #[test]
    fn generated_password_is_alphanumeric() {
        let password = generate_password();

        assert_eq!(password.len(), GENERATED_PASSWORD_LEN);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn bootstraps_admin_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(bootstrap_admin(db, Some("start123")).await?);
        assert!(!bootstrap_admin(db, Some("other123")).await?);

        let tokens = TokenService::new("test-secret", 24);
        let (_, admin) = AuthService::new(db, &tokens)
            .login(DEFAULT_ADMIN_USERNAME, "start123")
            .await?;
        assert!(admin.is_admin());

        Ok(())
    }

    /// Tests restarting after an admin deleted a default account.
    ///
    /// Expected: the second bootstrap creates nothing and the account stays deleted
    #[tokio::test]
    async fn restart_does_not_reseed_deleted_accounts() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(bootstrap(db, Some("start123")).await?);

        let accounts = AccountRepository::new(db);
        let leasing = accounts.find_by_name("Ausgaben Leasing").await?.unwrap();
        accounts.delete(&leasing.id).await?;

        assert!(!bootstrap(db, Some("start123")).await?);
        assert!(accounts.find_by_name("Ausgaben Leasing").await?.is_none());
        assert_eq!(accounts.get_all().await?.len(), DEFAULT_ACCOUNTS.len() - 1);

        Ok(())
    }

    #[tokio::test]
    async fn seeds_missing_accounts_only() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert_eq!(seed_default_accounts(db).await?, 5);
        assert_eq!(seed_default_accounts(db).await?, 0);

        let lessons = AccountRepository::new(db)
            .find_by_name("Einnahmen Fahrstunden")
            .await?
            .unwrap();
        assert!(lessons.is_driving_lessons());

        Ok(())
    }
}
