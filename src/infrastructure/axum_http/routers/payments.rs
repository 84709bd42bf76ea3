use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::usecases::payments::{OmiseGateway, PaymentUseCase};
use crate::domain::repositories::bookings::BookingsRepository;
use crate::domain::value_objects::payments::CreatePaymentIntentModel;
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::bookings::BookingPostgres,
};
use crate::payments::omise_client::OmiseClient;

pub fn routes(db_pool: Arc<PgPoolSquad>, omise_client: Arc<OmiseClient>) -> Router {
    let bookings_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let payments_usecase = PaymentUseCase::new(Arc::new(bookings_repository), omise_client);

    Router::new()
        .route("/create-intent", post(create_intent))
        .route("/status/:charge_id", get(check_status))
        .with_state(Arc::new(payments_usecase))
}

pub async fn create_intent<B, O>(
    State(payments_usecase): State<Arc<PaymentUseCase<B, O>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(create_intent_model): Json<CreatePaymentIntentModel>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    O: OmiseGateway + Send + Sync + 'static,
{
    match payments_usecase
        .create_intent(user_id, create_intent_model)
        .await
    {
        Ok(intent) => error_responses::created(intent),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn check_status<B, O>(
    State(payments_usecase): State<Arc<PaymentUseCase<B, O>>>,
    _auth: AuthUser,
    Path(charge_id): Path<String>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    O: OmiseGateway + Send + Sync + 'static,
{
    match payments_usecase.check_status(&charge_id).await {
        Ok(status) => error_responses::ok(status),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
