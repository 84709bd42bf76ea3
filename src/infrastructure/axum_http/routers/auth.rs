use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, patch, post},
};
use tracing::info;

use crate::application::usecases::auth::AuthUseCase;
use crate::config::config_model::DotEnvyConfig;
use crate::domain::repositories::users::UserRepository;
use crate::domain::value_objects::iam::{LoginModel, RegisterUserModel, UpdateProfileModel};
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::users::UserPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>, config: Arc<DotEnvyConfig>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let auth_usecase = AuthUseCase::new(
        Arc::new(user_repository),
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    );

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/me", patch(update_profile))
        .with_state(Arc::new(auth_usecase))
}

pub async fn register<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    Json(register_model): Json<RegisterUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.register(register_model).await {
        Ok(authenticated) => {
            info!(user_id = %authenticated.user.id, "auth: user registered");
            error_responses::created(authenticated)
        }
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn login<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    Json(login_model): Json<LoginModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.login(login_model).await {
        Ok(authenticated) => error_responses::ok(authenticated),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn me<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.me(user_id).await {
        Ok(profile) => error_responses::ok(profile),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn update_profile<U>(
    State(auth_usecase): State<Arc<AuthUseCase<U>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(update_model): Json<UpdateProfileModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match auth_usecase.update_profile(user_id, update_model).await {
        Ok(profile) => error_responses::ok(profile),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
