//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh opaque row id.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a user and an income account, the minimum needed to book a transaction.
///
/// # Returns
/// - `Ok((user, account))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_account(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::account::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let account = crate::factory::account::create_account(db).await?;

    Ok((user, account))
}
