use std::sync::Arc;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::weather::{
    BestTravelTimeModel, CurrentWeatherModel, ForecastSampleModel,
};

pub struct WeatherClient {
    api: Arc<ApiClient>,
}

impl WeatherClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn current(&self, city: &str) -> Result<Option<CurrentWeatherModel>, ApiError> {
        let response = self
            .api
            .get::<Option<CurrentWeatherModel>>(&format!("api/v1/weather/{}", city))
            .await?;
        Ok(response.data)
    }

    pub async fn forecast(
        &self,
        city: &str,
        days: u32,
    ) -> Result<Vec<ForecastSampleModel>, ApiError> {
        let response = self
            .api
            .get::<Vec<ForecastSampleModel>>(&format!(
                "api/v1/weather/{}/forecast?days={}",
                city, days
            ))
            .await?;
        Ok(response.data)
    }

    pub async fn best_travel_time(&self, city: &str) -> Result<BestTravelTimeModel, ApiError> {
        let response = self
            .api
            .get::<BestTravelTimeModel>(&format!("api/v1/weather/{}/best-travel-time", city))
            .await?;
        Ok(response.data)
    }
}
