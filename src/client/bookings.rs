use std::sync::Arc;

use uuid::Uuid;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::bookings::{
    BookingModel, NewBookingModel, TripBookingsSummaryModel, TripBookingsTotalModel,
    UpdateBookingModel,
};
use crate::domain::value_objects::enums::booking_types::BookingType;

pub struct BookingsClient {
    api: Arc<ApiClient>,
}

impl BookingsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn create(&self, new_booking: &NewBookingModel) -> Result<BookingModel, ApiError> {
        let response = self
            .api
            .post::<_, BookingModel>("api/v1/bookings", new_booking)
            .await?;
        Ok(response.data)
    }

    pub async fn get(&self, booking_id: Uuid) -> Result<BookingModel, ApiError> {
        let response = self
            .api
            .get::<BookingModel>(&format!("api/v1/bookings/{}", booking_id))
            .await?;
        Ok(response.data)
    }

    pub async fn update(
        &self,
        booking_id: Uuid,
        update_model: &UpdateBookingModel,
    ) -> Result<BookingModel, ApiError> {
        let response = self
            .api
            .patch::<_, BookingModel>(&format!("api/v1/bookings/{}", booking_id), update_model)
            .await?;
        Ok(response.data)
    }

    pub async fn delete(&self, booking_id: Uuid) -> Result<(), ApiError> {
        self.api
            .delete::<serde_json::Value>(&format!("api/v1/bookings/{}", booking_id))
            .await?;
        Ok(())
    }

    pub async fn list_by_trip(
        &self,
        trip_id: Uuid,
        booking_type: Option<BookingType>,
    ) -> Result<Vec<BookingModel>, ApiError> {
        let path = match booking_type {
            Some(booking_type) => {
                format!("api/v1/bookings/trip/{}/type/{}", trip_id, booking_type)
            }
            None => format!("api/v1/bookings/trip/{}", trip_id),
        };
        let response = self.api.get::<Vec<BookingModel>>(&path).await?;
        Ok(response.data)
    }

    pub async fn trip_total(&self, trip_id: Uuid) -> Result<TripBookingsTotalModel, ApiError> {
        let response = self
            .api
            .get::<TripBookingsTotalModel>(&format!("api/v1/bookings/trip/{}/total", trip_id))
            .await?;
        Ok(response.data)
    }

    pub async fn trip_summary(&self, trip_id: Uuid) -> Result<TripBookingsSummaryModel, ApiError> {
        let response = self
            .api
            .get::<TripBookingsSummaryModel>(&format!("api/v1/bookings/trip/{}/summary", trip_id))
            .await?;
        Ok(response.data)
    }
}
