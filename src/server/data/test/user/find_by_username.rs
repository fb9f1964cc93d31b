use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some(User)) for the existing name, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_username_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("beat")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("beat").await?;
    let missing = repo.find_by_username("Beat2").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(missing.is_none());

    Ok(())
}
