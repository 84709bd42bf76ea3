use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::trips::{InsertTripEntity, TripEntity, UpdateTripEntity};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait TripsRepository {
    async fn create(&self, insert_entity: InsertTripEntity) -> Result<TripEntity>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TripEntity>>;
    async fn find_by_id_for_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TripEntity>>;
    async fn update(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        changes: UpdateTripEntity,
    ) -> Result<Option<TripEntity>>;
    async fn delete(&self, trip_id: Uuid, user_id: Uuid) -> Result<bool>;
    async fn count_by_user(&self, user_id: Uuid) -> Result<i64>;
    async fn status_counts(&self, user_id: Uuid) -> Result<Vec<(String, i64)>>;
    async fn total_budget(&self, user_id: Uuid) -> Result<i64>;
}
