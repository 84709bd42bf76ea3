use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::application::usecases::{bookings::BookingUseCase, destinations::DestinationUseCase};
use crate::domain::repositories::{
    bookings::BookingsRepository, destinations::DestinationsRepository, trips::TripsRepository,
};
use crate::domain::value_objects::bookings::{NewBookingModel, UpdateBookingModel};
use crate::domain::value_objects::destinations::DestinationSearchFilter;
use crate::domain::value_objects::enums::booking_types::BookingType;
use crate::infrastructure::axum_http::{auth::AuthUser, error_responses};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{
        bookings::BookingPostgres, destinations::DestinationPostgres, trips::TripPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let bookings_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let trips_repository = TripPostgres::new(Arc::clone(&db_pool));
    let bookings_usecase =
        BookingUseCase::new(Arc::new(bookings_repository), Arc::new(trips_repository));

    let destinations_repository = DestinationPostgres::new(Arc::clone(&db_pool));
    let destinations_usecase = DestinationUseCase::new(Arc::new(destinations_repository));

    Router::new()
        .route("/", post(create))
        .route("/:id", get(get_booking))
        .route("/:id", patch(update))
        .route("/:id", delete(remove))
        .route("/trip/:trip_id", get(list_by_trip))
        .route("/trip/:trip_id/type/:booking_type", get(list_by_trip_and_type))
        .route("/trip/:trip_id/total", get(trip_total))
        .route("/trip/:trip_id/summary", get(trip_summary))
        .with_state(Arc::new(bookings_usecase))
        .merge(search_routes(Arc::new(destinations_usecase)))
}

fn search_routes<D>(destinations_usecase: Arc<DestinationUseCase<D>>) -> Router
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/search/hotels", get(search_hotels))
        .route("/search/restaurants", get(search_restaurants))
        .route("/search/flights", get(search_flights))
        .with_state(destinations_usecase)
}

pub async fn create<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(new_booking): Json<NewBookingModel>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase.create(user_id, new_booking).await {
        Ok(booking) => error_responses::created(booking),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn get_booking<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase.get(booking_id, user_id).await {
        Ok(booking) => error_responses::ok(booking),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn update<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(booking_id): Path<Uuid>,
    Json(update_model): Json<UpdateBookingModel>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase
        .update(booking_id, user_id, update_model)
        .await
    {
        Ok(booking) => error_responses::ok(booking),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn remove<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase.delete(booking_id, user_id).await {
        Ok(()) => error_responses::ok(serde_json::json!({ "deleted": true })),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_trip<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase.list_by_trip(trip_id, user_id, None).await {
        Ok(bookings) => error_responses::ok(bookings),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn list_by_trip_and_type<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path((trip_id, raw_booking_type)): Path<(Uuid, String)>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    let Some(booking_type) = BookingType::from_str(&raw_booking_type) else {
        return error_responses::error(
            StatusCode::BAD_REQUEST,
            format!("unknown booking type: {}", raw_booking_type),
        );
    };

    match bookings_usecase
        .list_by_trip(trip_id, user_id, Some(booking_type))
        .await
    {
        Ok(bookings) => error_responses::ok(bookings),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn trip_total<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase.trip_total(trip_id, user_id).await {
        Ok(total) => error_responses::ok(total),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn trip_summary<B, T>(
    State(bookings_usecase): State<Arc<BookingUseCase<B, T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    match bookings_usecase.trip_summary(trip_id, user_id).await {
        Ok(summary) => error_responses::ok(summary),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}

pub async fn search_hotels<D>(
    State(destinations_usecase): State<Arc<DestinationUseCase<D>>>,
    _auth: AuthUser,
    Query(filter): Query<DestinationSearchFilter>,
) -> impl IntoResponse
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    search_by_tag(destinations_usecase, "hotel", filter).await
}

pub async fn search_restaurants<D>(
    State(destinations_usecase): State<Arc<DestinationUseCase<D>>>,
    _auth: AuthUser,
    Query(filter): Query<DestinationSearchFilter>,
) -> impl IntoResponse
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    search_by_tag(destinations_usecase, "restaurant", filter).await
}

pub async fn search_flights<D>(
    State(destinations_usecase): State<Arc<DestinationUseCase<D>>>,
    _auth: AuthUser,
    Query(filter): Query<DestinationSearchFilter>,
) -> impl IntoResponse
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    search_by_tag(destinations_usecase, "flight", filter).await
}

async fn search_by_tag<D>(
    destinations_usecase: Arc<DestinationUseCase<D>>,
    tag: &str,
    filter: DestinationSearchFilter,
) -> axum::response::Response
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    match destinations_usecase.search_by_tag(tag, filter).await {
        Ok(destinations) => error_responses::ok(destinations),
        Err(err) => error_responses::error(err.status_code(), err.to_string()),
    }
}
