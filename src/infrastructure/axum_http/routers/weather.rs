use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::application::usecases::weather::{WeatherGateway, WeatherUseCase};
use crate::infrastructure::axum_http::error_responses;
use crate::weather::openweather_client::OpenWeatherClient;

const DEFAULT_FORECAST_DAYS: u32 = 5;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    days: Option<u32>,
}

pub fn routes(weather_client: Arc<OpenWeatherClient>) -> Router {
    let weather_usecase = WeatherUseCase::new(weather_client);

    Router::new()
        .route("/:city", get(current_weather))
        .route("/:city/forecast", get(forecast))
        .route("/:city/best-travel-time", get(best_travel_time))
        .with_state(Arc::new(weather_usecase))
}

pub async fn current_weather<G>(
    State(weather_usecase): State<Arc<WeatherUseCase<G>>>,
    Path(city): Path<String>,
) -> impl IntoResponse
where
    G: WeatherGateway + Send + Sync + 'static,
{
    let weather = weather_usecase.get_current_weather(&city).await;
    error_responses::ok(weather)
}

pub async fn forecast<G>(
    State(weather_usecase): State<Arc<WeatherUseCase<G>>>,
    Path(city): Path<String>,
    Query(query): Query<ForecastQuery>,
) -> impl IntoResponse
where
    G: WeatherGateway + Send + Sync + 'static,
{
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let samples = weather_usecase.get_forecast(&city, days).await;
    error_responses::ok(samples)
}

pub async fn best_travel_time<G>(
    State(weather_usecase): State<Arc<WeatherUseCase<G>>>,
    Path(city): Path<String>,
) -> impl IntoResponse
where
    G: WeatherGateway + Send + Sync + 'static,
{
    let recommendation = weather_usecase.best_travel_time(&city).await;
    error_responses::ok(recommendation)
}
