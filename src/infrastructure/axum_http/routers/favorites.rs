use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, post},
};
use uuid::Uuid;

use crate::application::usecases::favorites::FavoriteUseCase;
use crate::domain::repositories::{
    destinations::DestinationsRepository, favorites::FavoritesRepository,
};
use crate::domain::value_objects::favorites::InsertFavoriteModel;
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{destinations::DestinationPostgres, favorites::FavoritePostgres},
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let favorites_repository = FavoritePostgres::new(Arc::clone(&db_pool));
    let destinations_repository = DestinationPostgres::new(Arc::clone(&db_pool));
    let favorites_usecase = FavoriteUseCase::new(
        Arc::new(favorites_repository),
        Arc::new(destinations_repository),
    );

    Router::new()
        .route("/", post(add).get(list))
        .route("/:id", delete(remove))
        .with_state(Arc::new(favorites_usecase))
}

pub async fn add<F, D>(
    State(favorites_usecase): State<Arc<FavoriteUseCase<F, D>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(insert_model): Json<InsertFavoriteModel>,
) -> impl IntoResponse
where
    F: FavoritesRepository + Send + Sync + 'static,
    D: DestinationsRepository + Send + Sync + 'static,
{
    match favorites_usecase.add(user_id, insert_model).await {
        Ok(favorite) => error_responses::created(favorite),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn list<F, D>(
    State(favorites_usecase): State<Arc<FavoriteUseCase<F, D>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    F: FavoritesRepository + Send + Sync + 'static,
    D: DestinationsRepository + Send + Sync + 'static,
{
    match favorites_usecase.list(user_id).await {
        Ok(favorites) => error_responses::ok(favorites),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn remove<F, D>(
    State(favorites_usecase): State<Arc<FavoriteUseCase<F, D>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(favorite_id): Path<Uuid>,
) -> impl IntoResponse
where
    F: FavoritesRepository + Send + Sync + 'static,
    D: DestinationsRepository + Send + Sync + 'static,
{
    match favorites_usecase.remove(favorite_id, user_id).await {
        Ok(()) => error_responses::ok(serde_json::json!({ "deleted": true })),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
