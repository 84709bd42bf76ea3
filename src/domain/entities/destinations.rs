use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::destinations;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = destinations)]
pub struct DestinationEntity {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub best_seasons: serde_json::Value,
    pub activity_tags: serde_json::Value,
    pub average_daily_cost_minor: i64,
    pub monthly_weather: serde_json::Value,
    pub tags: serde_json::Value,
    pub popularity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
