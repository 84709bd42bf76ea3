use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::application::usecases::destinations::DestinationUseCase;
use crate::domain::repositories::destinations::DestinationsRepository;
use crate::domain::value_objects::destinations::DestinationSearchFilter;
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::destinations::DestinationPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let destinations_repository = DestinationPostgres::new(Arc::clone(&db_pool));
    let destinations_usecase = DestinationUseCase::new(Arc::new(destinations_repository));

    Router::new()
        .route("/", get(list))
        .route("/:id", get(get_destination))
        .with_state(Arc::new(destinations_usecase))
}

pub async fn list<D>(
    State(destinations_usecase): State<Arc<DestinationUseCase<D>>>,
    _auth: AuthUser,
    Query(filter): Query<DestinationSearchFilter>,
) -> impl IntoResponse
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    match destinations_usecase.list(filter).await {
        Ok(destinations) => error_responses::ok(destinations),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn get_destination<D>(
    State(destinations_usecase): State<Arc<DestinationUseCase<D>>>,
    _auth: AuthUser,
    Path(destination_id): Path<Uuid>,
) -> impl IntoResponse
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    match destinations_usecase.get(destination_id).await {
        Ok(destination) => error_responses::ok(destination),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
