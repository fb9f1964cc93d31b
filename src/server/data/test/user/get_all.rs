use super::*;

/// Tests listing users.
///
/// Verifies that users are returned ordered by username ascending.
///
/// Expected: Ok(Vec<User>) sorted by username
#[tokio::test]
async fn returns_users_sorted_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["zora", "anton", "mia"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|u| u.username)
        .collect();

    assert_eq!(names, vec!["anton", "mia", "zora"]);

    Ok(())
}
