use std::time::Instant;

use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::{
    model::auth::{ChangePasswordDto, RegisterDto, Role},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{ChangePasswordParam, RegisterUserParam},
        service::auth::{token::TokenService, AuthService},
    },
};

fn register_param(username: &str, password: &str, role: Role) -> RegisterUserParam {
    RegisterUserParam::from_dto(RegisterDto {
        username: username.to_string(),
        password: password.to_string(),
        role,
    })
    .unwrap()
}

/// Tests registering and logging in.
///
/// Verifies that a registered user can log in and that the issued token resolves back
/// to the same user.
///
/// Expected: Ok with matching user IDs
#[tokio::test]
async fn register_then_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    let user = service
        .register(register_param("anna", "geheim123", Role::User))
        .await?;
    let (token, logged_in) = service.login("anna", "geheim123").await?;
    let authenticated = service.authenticate(&token).await?;

    assert_eq!(user.role, Role::User);
    assert_eq!(logged_in.id, user.id);
    assert_eq!(authenticated.id, user.id);
    assert_ne!(user.password_hash, "geheim123");

    Ok(())
}

/// Tests registering a taken username.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_username_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_param("anna", "geheim123", Role::User))
        .await?;
    let result = service
        .register(register_param("anna", "anderes123", Role::Admin))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that login failures do not reveal whether the username exists.
///
/// Expected: Err(AuthError::InvalidCredentials) for both wrong password and unknown user
#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_param("anna", "geheim123", Role::User))
        .await?;

    let wrong_password = service.login("anna", "falsch123").await;
    let unknown_user = service.login("bruno", "geheim123").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests authenticating with a token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn token_of_deleted_user_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_param("anna", "geheim123", Role::User))
        .await?;
    let (token, user) = service.login("anna", "geheim123").await?;
    UserRepository::new(db).delete(&user.id).await?;

    let result = service.authenticate(&token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}

/// Tests changing a password.
///
/// Verifies that a wrong old password is rejected and that after a successful change
/// only the new password logs in.
///
/// Expected: BadRequest first, then login succeeds with the new password only
#[tokio::test]
async fn change_password_requires_old_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    let user = service
        .register(register_param("anna", "geheim123", Role::User))
        .await?;

    let change = |old: &str| {
        ChangePasswordParam::from_dto(
            user.id.clone(),
            ChangePasswordDto {
                old_password: old.to_string(),
                new_password: "neues-passwort".to_string(),
            },
        )
    };

    let wrong = service.change_password(change("falsch123")?).await;
    assert!(matches!(wrong, Err(AppError::BadRequest(_))));

    service.change_password(change("geheim123")?).await?;

    assert!(service.login("anna", "geheim123").await.is_err());
    assert!(service.login("anna", "neues-passwort").await.is_ok());

    Ok(())
}

/// Tests registration input validation.
///
/// Expected: Err(AppError::Validation) for a short password and a blank username
#[tokio::test]
async fn rejects_short_password_and_blank_username() -> Result<(), DbErr> {
    let short = RegisterUserParam::from_dto(RegisterDto {
        username: "anna".to_string(),
        password: "12345".to_string(),
        role: Role::User,
    });
    let blank = RegisterUserParam::from_dto(RegisterDto {
        username: "   ".to_string(),
        password: "geheim123".to_string(),
        role: Role::User,
    });

    assert!(matches!(short, Err(AppError::Validation(_))));
    assert!(matches!(blank, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that an unknown username costs a password verification like a wrong password.
///
/// Verifies that the unknown-user failure is not orders of magnitude faster than the
/// wrong-password failure.
///
/// Expected: both fail with InvalidCredentials within a tenth of each other's cost
#[tokio::test]
async fn unknown_user_pays_for_password_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_param("anna", "geheim123", Role::User))
        .await?;
    let _ = service.login("warmup", "geheim123").await;

    let start = Instant::now();
    let wrong_password = service.login("anna", "falsch123").await;
    let wrong_password_cost = start.elapsed();

    let start = Instant::now();
    let unknown_user = service.login("bruno", "falsch123").await;
    let unknown_user_cost = start.elapsed();

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(
        unknown_user_cost * 10 >= wrong_password_cost,
        "unknown user took {unknown_user_cost:?}, wrong password {wrong_password_cost:?}"
    );

    Ok(())
}

/// Tests logging in with the surrounding whitespace used at registration.
///
/// Expected: Ok for both the padded and the trimmed username
#[tokio::test]
async fn login_trims_username_like_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    let user = service
        .register(register_param(" anna ", "geheim123", Role::User))
        .await?;

    let (_, padded) = service.login(" anna ", "geheim123").await?;
    let (_, trimmed) = service.login("anna", "geheim123").await?;

    assert_eq!(user.username, "anna");
    assert_eq!(padded.id, user.id);
    assert_eq!(trimmed.id, user.id);

    Ok(())
}

/// Tests registering an admin through the service without any acting user.
///
/// Expected: login returns the admin role
#[tokio::test]
async fn registered_admin_logs_in_as_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 24);
    let service = AuthService::new(db, &tokens);

    service
        .register(register_param("chefin", "geheim123", Role::Admin))
        .await?;
    let (_, user) = service.login("chefin", "geheim123").await?;

    assert_eq!(user.role, Role::Admin);
    assert!(user.is_admin());

    Ok(())
}
