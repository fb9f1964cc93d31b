use crate::{
    model::auth::{RegisterDto, Role},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::user::RegisterUserParam,
        service::auth::{token::TokenService, AuthService},
    },
};
use test_utils::builder::TestBuilder;

mod bearer;
mod require;

/// Registers a user and returns a bearer token for them.
async fn login_as(
    db: &sea_orm::DatabaseConnection,
    tokens: &TokenService,
    username: &str,
    role: Role,
) -> Result<BearerToken, AppError> {
    let service = AuthService::new(db, tokens);
    let param = RegisterUserParam::from_dto(RegisterDto {
        username: username.to_string(),
        password: "geheim123".to_string(),
        role,
    })?;
    service.register(param).await?;
    let (token, _) = service.login(username, "geheim123").await?;

    Ok(BearerToken(Some(token)))
}
