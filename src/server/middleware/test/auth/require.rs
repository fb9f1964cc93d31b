use super::*;

/// Tests a request without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let bearer = BearerToken(None);

    let result = AuthGuard::new(db, &tokens, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that any valid token passes when no permission is required.
///
/// Expected: Ok(User) for a regular user
#[tokio::test]
async fn grants_access_to_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let bearer = login_as(db, &tokens, "anna", Role::User).await?;

    let user = AuthGuard::new(db, &tokens, &bearer).require(&[]).await?;

    assert_eq!(user.username, "anna");

    Ok(())
}

/// Tests admin permission checks.
///
/// Expected: Ok for the admin, Err(AuthError::AccessDenied) for a regular user
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let admin = login_as(db, &tokens, "chef", Role::Admin).await?;
    let user = login_as(db, &tokens, "anna", Role::User).await?;

    let granted = AuthGuard::new(db, &tokens, &admin)
        .require(&[Permission::Admin])
        .await?;
    let denied = AuthGuard::new(db, &tokens, &user)
        .require(&[Permission::Admin])
        .await;

    assert!(granted.is_admin());
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a token whose user has been deleted.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let bearer = login_as(db, &tokens, "anna", Role::User).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("anna").await?.unwrap();
    repo.delete(&user.id).await?;

    let result = AuthGuard::new(db, &tokens, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let expired = TokenService::new("test-secret", -2);
    let bearer = login_as(db, &expired, "anna", Role::User).await?;

    let result = AuthGuard::new(db, &expired, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
