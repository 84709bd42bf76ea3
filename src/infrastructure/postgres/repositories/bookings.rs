use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::domain::entities::bookings::{
    BookingEntity, InsertBookingEntity, UpdateBookingEntity,
};
use crate::domain::repositories::bookings::BookingsRepository;
use crate::domain::value_objects::enums::booking_statuses::BookingStatus;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{bookings, trips},
};

pub struct BookingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BookingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BookingsRepository for BookingPostgres {
    async fn create(&self, insert_entity: InsertBookingEntity) -> Result<BookingEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(bookings::table)
            .values(&insert_entity)
            .returning(BookingEntity::as_returning())
            .get_result::<BookingEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id_for_user(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = bookings::table
            .find(booking_id)
            .filter(bookings::trip_id.eq_any(
                trips::table
                    .filter(trips::user_id.eq(user_id))
                    .select(trips::id),
            ))
            .select(BookingEntity::as_select())
            .first::<BookingEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn update(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
        changes: UpdateBookingEntity,
    ) -> Result<Option<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(bookings::table)
            .filter(bookings::id.eq(booking_id))
            .filter(bookings::trip_id.eq_any(
                trips::table
                    .filter(trips::user_id.eq(user_id))
                    .select(trips::id),
            ))
            .set(&changes)
            .returning(BookingEntity::as_returning())
            .get_result::<BookingEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, booking_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(bookings::table)
            .filter(bookings::id.eq(booking_id))
            .filter(bookings::trip_id.eq_any(
                trips::table
                    .filter(trips::user_id.eq(user_id))
                    .select(trips::id),
            ))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn list_by_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        booking_type: Option<String>,
    ) -> Result<Vec<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = bookings::table
            .inner_join(trips::table)
            .filter(bookings::trip_id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .select(BookingEntity::as_select())
            .order(bookings::start_date.asc())
            .into_boxed();

        if let Some(booking_type) = booking_type {
            query = query.filter(bookings::booking_type.eq(booking_type));
        }

        let results = query.load::<BookingEntity>(&mut conn)?;

        Ok(results)
    }

    async fn trip_total(&self, trip_id: Uuid, user_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let prices = bookings::table
            .inner_join(trips::table)
            .filter(bookings::trip_id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .select(bookings::price_minor)
            .load::<i64>(&mut conn)?;

        Ok(prices.into_iter().sum())
    }

    async fn find_pending_for_checkout(
        &self,
        user_id: Uuid,
        trip_id: Uuid,
        booking_ids: Vec<Uuid>,
    ) -> Result<Vec<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = bookings::table
            .inner_join(trips::table)
            .filter(bookings::id.eq_any(booking_ids))
            .filter(bookings::trip_id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .filter(bookings::status.eq(BookingStatus::Pending.to_string()))
            .select(BookingEntity::as_select())
            .load::<BookingEntity>(&mut conn)?;

        Ok(results)
    }

    async fn set_charge_id(&self, booking_ids: Vec<Uuid>, charge_id: &str) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(bookings::table)
            .filter(bookings::id.eq_any(booking_ids))
            .filter(bookings::status.eq(BookingStatus::Pending.to_string()))
            .set(bookings::charge_id.eq(charge_id))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn confirm_paid(&self, booking_ids: Vec<Uuid>) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let confirmed = update(bookings::table)
            .filter(bookings::id.eq_any(booking_ids))
            .filter(bookings::status.eq(BookingStatus::Pending.to_string()))
            .set(bookings::status.eq(BookingStatus::Confirmed.to_string()))
            .execute(&mut conn)?;

        Ok(confirmed)
    }
}
