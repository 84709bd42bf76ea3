use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::domain::entities::trips::{InsertTripEntity, TripEntity, UpdateTripEntity};
use crate::domain::repositories::trips::TripsRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::trips};

pub struct TripPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TripPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TripsRepository for TripPostgres {
    async fn create(&self, insert_entity: InsertTripEntity) -> Result<TripEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(trips::table)
            .values(&insert_entity)
            .returning(TripEntity::as_returning())
            .get_result::<TripEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TripEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = trips::table
            .filter(trips::user_id.eq(user_id))
            .select(TripEntity::as_select())
            .order(trips::start_date.desc())
            .load::<TripEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id_for_user(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TripEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = trips::table
            .find(trip_id)
            .filter(trips::user_id.eq(user_id))
            .select(TripEntity::as_select())
            .first::<TripEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn update(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        changes: UpdateTripEntity,
    ) -> Result<Option<TripEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(trips::table)
            .filter(trips::id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .set(&changes)
            .returning(TripEntity::as_returning())
            .get_result::<TripEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, trip_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(trips::table)
            .filter(trips::id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn count_by_user(&self, user_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = trips::table
            .filter(trips::user_id.eq(user_id))
            .select(count_star())
            .first::<i64>(&mut conn)?;

        Ok(result)
    }

    async fn status_counts(&self, user_id: Uuid) -> Result<Vec<(String, i64)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = trips::table
            .filter(trips::user_id.eq(user_id))
            .group_by(trips::status)
            .select((trips::status, count_star()))
            .load::<(String, i64)>(&mut conn)?;

        Ok(results)
    }

    async fn total_budget(&self, user_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let budgets = trips::table
            .filter(trips::user_id.eq(user_id))
            .select(trips::budget_minor)
            .load::<i64>(&mut conn)?;

        Ok(budgets.into_iter().sum())
    }
}
