use std::sync::Arc;

use uuid::Uuid;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::trips::{
    NewTripModel, TripCountModel, TripModel, TripStatsModel, UpdateTripModel,
};

pub struct TripsClient {
    api: Arc<ApiClient>,
}

impl TripsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn create(&self, new_trip: &NewTripModel) -> Result<TripModel, ApiError> {
        let response = self.api.post::<_, TripModel>("api/v1/trips", new_trip).await?;
        Ok(response.data)
    }

    pub async fn list(&self) -> Result<Vec<TripModel>, ApiError> {
        let response = self.api.get::<Vec<TripModel>>("api/v1/trips").await?;
        Ok(response.data)
    }

    pub async fn get(&self, trip_id: Uuid) -> Result<TripModel, ApiError> {
        let response = self
            .api
            .get::<TripModel>(&format!("api/v1/trips/{}", trip_id))
            .await?;
        Ok(response.data)
    }

    pub async fn update(
        &self,
        trip_id: Uuid,
        update_model: &UpdateTripModel,
    ) -> Result<TripModel, ApiError> {
        let response = self
            .api
            .patch::<_, TripModel>(&format!("api/v1/trips/{}", trip_id), update_model)
            .await?;
        Ok(response.data)
    }

    pub async fn delete(&self, trip_id: Uuid) -> Result<(), ApiError> {
        self.api
            .delete::<serde_json::Value>(&format!("api/v1/trips/{}", trip_id))
            .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<TripCountModel, ApiError> {
        let response = self.api.get::<TripCountModel>("api/v1/trips/count").await?;
        Ok(response.data)
    }

    pub async fn stats(&self) -> Result<TripStatsModel, ApiError> {
        let response = self.api.get::<TripStatsModel>("api/v1/trips/stats").await?;
        Ok(response.data)
    }
}
