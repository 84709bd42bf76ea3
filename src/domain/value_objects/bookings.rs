use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::bookings::BookingEntity;
use crate::domain::value_objects::enums::{
    booking_statuses::BookingStatus, booking_types::BookingType,
};

/// Type-specific booking payload. The variant tag doubles as the booking
/// type column, so a payload can never disagree with its row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingDetails {
    Hotel(HotelDetails),
    Flight(FlightDetails),
    Restaurant(RestaurantDetails),
    Activity(ActivityDetails),
}

impl BookingDetails {
    pub fn booking_type(&self) -> BookingType {
        match self {
            BookingDetails::Hotel(_) => BookingType::Hotel,
            BookingDetails::Flight(_) => BookingType::Flight,
            BookingDetails::Restaurant(_) => BookingType::Restaurant,
            BookingDetails::Activity(_) => BookingType::Activity,
        }
    }

    /// Parses a stored details payload, falling back to an empty payload of
    /// the row's booking type when the stored JSON does not round-trip.
    pub fn from_stored(value: serde_json::Value, booking_type: BookingType) -> Self {
        serde_json::from_value(value).unwrap_or_else(|_| match booking_type {
            BookingType::Hotel => BookingDetails::Hotel(HotelDetails::default()),
            BookingType::Flight => BookingDetails::Flight(FlightDetails::default()),
            BookingType::Restaurant => BookingDetails::Restaurant(RestaurantDetails::default()),
            BookingType::Activity => BookingDetails::Activity(ActivityDetails::default()),
        })
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelDetails {
    pub room_type: Option<String>,
    pub nights: Option<i32>,
    pub guests: Option<i32>,
    pub address: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightDetails {
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantDetails {
    pub cuisine: Option<String>,
    pub party_size: Option<i32>,
    pub reservation_time: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityDetails {
    pub location: Option<String>,
    pub duration_hours: Option<i32>,
    pub participants: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingModel {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub booking_type: BookingType,
    pub title: String,
    pub description: Option<String>,
    pub price_minor: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: BookingStatus,
    pub details: BookingDetails,
    pub notes: Option<String>,
    pub charge_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingEntity> for BookingModel {
    fn from(entity: BookingEntity) -> Self {
        let booking_type =
            BookingType::from_str(&entity.booking_type).unwrap_or(BookingType::Activity);
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            booking_type,
            title: entity.title,
            description: entity.description,
            price_minor: entity.price_minor,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: BookingStatus::from_str(&entity.status),
            details: BookingDetails::from_stored(entity.details, booking_type),
            notes: entity.notes,
            charge_id: entity.charge_id,
            created_at: entity.created_at,
        }
    }
}

/// Creation payload. A caller-supplied status is accepted for shape
/// compatibility but ignored: bookings are always created pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookingModel {
    pub trip_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price_minor: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub details: BookingDetails,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripBookingsTotalModel {
    pub trip_id: Uuid,
    pub total_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingTypeSummaryModel {
    pub booking_type: BookingType,
    pub count: i64,
    pub total_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripBookingsSummaryModel {
    pub trip_id: Uuid,
    pub by_type: Vec<BookingTypeSummaryModel>,
    pub total_minor: i64,
}
