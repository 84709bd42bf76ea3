use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::trips::TripEntity;
use crate::domain::value_objects::enums::trip_statuses::TripStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub destination: String,
    pub country: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_minor: i64,
    pub status: TripStatus,
    pub itinerary: Option<serde_json::Value>,
    pub ai_suggestions: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TripEntity> for TripModel {
    fn from(entity: TripEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            destination: entity.destination,
            country: entity.country,
            start_date: entity.start_date,
            end_date: entity.end_date,
            budget_minor: entity.budget_minor,
            status: TripStatus::from_str(&entity.status),
            itinerary: entity.itinerary,
            ai_suggestions: entity.ai_suggestions,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTripModel {
    pub destination: String,
    pub country: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_minor: i64,
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTripModel {
    pub destination: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_minor: Option<i64>,
    pub status: Option<TripStatus>,
    pub itinerary: Option<serde_json::Value>,
    pub ai_suggestions: Option<serde_json::Value>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripCountModel {
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripStatusCountModel {
    pub status: TripStatus,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripStatsModel {
    pub total: i64,
    pub by_status: Vec<TripStatusCountModel>,
    pub total_budget_minor: i64,
}
