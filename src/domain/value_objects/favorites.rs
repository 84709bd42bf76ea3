use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::favorites::FavoriteEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub destination_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<FavoriteEntity> for FavoriteModel {
    fn from(entity: FavoriteEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            destination_id: entity.destination_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertFavoriteModel {
    pub destination_id: Uuid,
}
