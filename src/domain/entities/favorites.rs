use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::favorites;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = favorites)]
pub struct FavoriteEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub destination_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorites)]
pub struct InsertFavoriteEntity {
    pub user_id: Uuid,
    pub destination_id: Uuid,
}
