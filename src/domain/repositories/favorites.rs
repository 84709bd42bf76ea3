use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::favorites::{FavoriteEntity, InsertFavoriteEntity};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait FavoritesRepository {
    async fn find(&self, user_id: Uuid, destination_id: Uuid) -> Result<Option<FavoriteEntity>>;
    async fn insert(&self, insert_entity: InsertFavoriteEntity) -> Result<FavoriteEntity>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteEntity>>;
    async fn delete(&self, favorite_id: Uuid, user_id: Uuid) -> Result<bool>;
}
