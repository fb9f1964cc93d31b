use super::*;

/// Tests deleting a user twice.
///
/// Verifies that the first delete removes the row and the second reports nothing deleted.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(&user.id).await?);
    assert!(!repo.delete(&user.id).await?);

    Ok(())
}

/// Tests replacing a password hash.
///
/// Expected: Ok(true) for an existing user, Ok(false) for an unknown ID
#[tokio::test]
async fn updates_password_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.update_password_hash(&user.id, "new-hash").await?);
    assert!(!repo.update_password_hash("missing", "new-hash").await?);

    let reloaded = repo.find_by_id(&user.id).await?.unwrap();
    assert_eq!(reloaded.password_hash, "new-hash");

    Ok(())
}
