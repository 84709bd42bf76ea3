use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::bookings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = bookings)]
pub struct BookingEntity {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub booking_type: String,
    pub title: String,
    pub description: Option<String>,
    pub price_minor: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub details: serde_json::Value,
    pub notes: Option<String>,
    pub charge_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct InsertBookingEntity {
    pub trip_id: Uuid,
    pub booking_type: String,
    pub title: String,
    pub description: Option<String>,
    pub price_minor: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub details: serde_json::Value,
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, AsChangeset)]
#[diesel(table_name = bookings)]
pub struct UpdateBookingEntity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
