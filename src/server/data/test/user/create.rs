use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores the username, hash and role and generates an ID.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_user_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("lehrer".to_string(), "hash".to_string(), Role::Admin)
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.username, "lehrer");
    assert_eq!(user.password_hash, "hash");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests that usernames are unique at the database level.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("anna".to_string(), "h1".to_string(), Role::User)
        .await?;
    let result = repo
        .create("anna".to_string(), "h2".to_string(), Role::User)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests reading back a row with a corrupted role.
///
/// Verifies that an unknown stored role surfaces as an internal error instead of a panic.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn corrupted_role_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("superuser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(&user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
