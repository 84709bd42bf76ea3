use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::trips;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = trips)]
pub struct TripEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub destination: String,
    pub country: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_minor: i64,
    pub status: String,
    pub itinerary: Option<serde_json::Value>,
    pub ai_suggestions: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trips)]
pub struct InsertTripEntity {
    pub user_id: Uuid,
    pub destination: String,
    pub country: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_minor: i64,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, AsChangeset)]
#[diesel(table_name = trips)]
pub struct UpdateTripEntity {
    pub destination: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_minor: Option<i64>,
    pub status: Option<String>,
    pub itinerary: Option<serde_json::Value>,
    pub ai_suggestions: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
