use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::bookings::{BookingEntity, InsertBookingEntity, UpdateBookingEntity};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait BookingsRepository {
    async fn create(&self, insert_entity: InsertBookingEntity) -> Result<BookingEntity>;
    async fn find_by_id_for_user(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<BookingEntity>>;
    async fn update(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
        changes: UpdateBookingEntity,
    ) -> Result<Option<BookingEntity>>;
    async fn delete(&self, booking_id: Uuid, user_id: Uuid) -> Result<bool>;
    async fn list_by_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        booking_type: Option<String>,
    ) -> Result<Vec<BookingEntity>>;
    async fn trip_total(&self, trip_id: Uuid, user_id: Uuid) -> Result<i64>;
    /// Loads the given bookings when they belong to the user's trip and are
    /// still pending. Bookings that fail either condition are absent from
    /// the result.
    async fn find_pending_for_checkout(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        booking_ids: Vec<Uuid>,
    ) -> Result<Vec<BookingEntity>>;
    async fn set_charge_id(&self, booking_ids: Vec<Uuid>, charge_id: &str) -> Result<()>;
    /// Moves pending bookings to confirmed. Returns the number of rows
    /// actually transitioned.
    async fn confirm_paid(&self, booking_ids: Vec<Uuid>) -> Result<usize>;
}
