use super::*;

/// Tests detecting when admin users exist.
///
/// Verifies that the repository returns true when at least one admin user exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests detecting when only regular users exist.
///
/// Verifies that regular users do not count as admins, the first-start scenario.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}
