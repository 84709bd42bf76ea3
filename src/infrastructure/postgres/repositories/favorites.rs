use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*};
use uuid::Uuid;

use crate::domain::entities::favorites::{FavoriteEntity, InsertFavoriteEntity};
use crate::domain::repositories::favorites::FavoritesRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::favorites};

pub struct FavoritePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl FavoritePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl FavoritesRepository for FavoritePostgres {
    async fn find(&self, user_id: Uuid, destination_id: Uuid) -> Result<Option<FavoriteEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .filter(favorites::destination_id.eq(destination_id))
            .select(FavoriteEntity::as_select())
            .first::<FavoriteEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn insert(&self, insert_entity: InsertFavoriteEntity) -> Result<FavoriteEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(favorites::table)
            .values(&insert_entity)
            .returning(FavoriteEntity::as_returning())
            .get_result::<FavoriteEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = favorites::table
            .filter(favorites::user_id.eq(user_id))
            .select(FavoriteEntity::as_select())
            .order(favorites::created_at.desc())
            .load::<FavoriteEntity>(&mut conn)?;

        Ok(results)
    }

    async fn delete(&self, favorite_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(favorites::table)
            .filter(favorites::id.eq(favorite_id))
            .filter(favorites::user_id.eq(user_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
