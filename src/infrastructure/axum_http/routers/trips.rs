use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::application::usecases::trips::TripUseCase;
use crate::domain::repositories::trips::TripsRepository;
use crate::domain::value_objects::trips::{NewTripModel, UpdateTripModel};
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::trips::TripPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let trips_repository = TripPostgres::new(Arc::clone(&db_pool));
    let trips_usecase = TripUseCase::new(Arc::new(trips_repository));

    Router::new()
        .route("/", post(create).get(list))
        .route("/count", get(count))
        .route("/stats", get(stats))
        .route("/:id", get(get_trip))
        .route("/:id", patch(update))
        .route("/:id", delete(remove))
        .with_state(Arc::new(trips_usecase))
}

pub async fn create<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(new_trip): Json<NewTripModel>,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.create(user_id, new_trip).await {
        Ok(trip) => error_responses::created(trip),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn list<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.list(user_id).await {
        Ok(trips) => error_responses::ok(trips),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn get_trip<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.get(trip_id, user_id).await {
        Ok(trip) => error_responses::ok(trip),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn update<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
    Json(update_model): Json<UpdateTripModel>,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.update(trip_id, user_id, update_model).await {
        Ok(trip) => error_responses::ok(trip),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn remove<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.delete(trip_id, user_id).await {
        Ok(()) => error_responses::ok(serde_json::json!({ "deleted": true })),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn count<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.count(user_id).await {
        Ok(count) => error_responses::ok(count),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn stats<T>(
    State(trips_usecase): State<Arc<TripUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    T: TripsRepository + Send + Sync + 'static,
{
    match trips_usecase.stats(user_id).await {
        Ok(stats) => error_responses::ok(stats),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
