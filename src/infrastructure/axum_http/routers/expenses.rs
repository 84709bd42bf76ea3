use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::usecases::expenses::ExpenseUseCase;
use crate::domain::repositories::{expenses::ExpensesRepository, trips::TripsRepository};
use crate::domain::value_objects::enums::expense_categories::ExpenseCategory;
use crate::domain::value_objects::expenses::{NewExpenseModel, UpdateExpenseModel};
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{expenses::ExpensePostgres, trips::TripPostgres},
};

#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    category: Option<ExpenseCategory>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let expenses_repository = ExpensePostgres::new(Arc::clone(&db_pool));
    let trips_repository = TripPostgres::new(Arc::clone(&db_pool));
    let expenses_usecase =
        ExpenseUseCase::new(Arc::new(expenses_repository), Arc::new(trips_repository));

    Router::new()
        .route("/", post(create))
        .route("/trip/:trip_id", get(list_by_trip))
        .route("/trip/:trip_id/summary", get(trip_summary))
        .route("/:id", patch(update))
        .route("/:id", delete(remove))
        .with_state(Arc::new(expenses_usecase))
}

pub async fn create<E, T>(
    State(expenses_usecase): State<Arc<ExpenseUseCase<E, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(new_expense): Json<NewExpenseModel>,
) -> impl IntoResponse
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match expenses_usecase.create(user_id, new_expense).await {
        Ok(expense) => error_responses::created(expense),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_trip<E, T>(
    State(expenses_usecase): State<Arc<ExpenseUseCase<E, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
    Query(query): Query<ListExpensesQuery>,
) -> impl IntoResponse
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match expenses_usecase
        .list_by_trip(trip_id, user_id, query.category)
        .await
    {
        Ok(expenses) => error_responses::ok(expenses),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn trip_summary<E, T>(
    State(expenses_usecase): State<Arc<ExpenseUseCase<E, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match expenses_usecase.trip_summary(trip_id, user_id).await {
        Ok(summary) => error_responses::ok(summary),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn update<E, T>(
    State(expenses_usecase): State<Arc<ExpenseUseCase<E, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(expense_id): Path<Uuid>,
    Json(update_model): Json<UpdateExpenseModel>,
) -> impl IntoResponse
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match expenses_usecase
        .update(expense_id, user_id, update_model)
        .await
    {
        Ok(expense) => error_responses::ok(expense),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn remove<E, T>(
    State(expenses_usecase): State<Arc<ExpenseUseCase<E, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(expense_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match expenses_usecase.delete(expense_id, user_id).await {
        Ok(()) => error_responses::ok(serde_json::json!({ "deleted": true })),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
