use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::repositories::{bookings::BookingsRepository, trips::TripsRepository};
use crate::domain::value_objects::bookings::{
    BookingModel, BookingTypeSummaryModel, NewBookingModel, TripBookingsSummaryModel,
    TripBookingsTotalModel, UpdateBookingModel,
};
use crate::domain::value_objects::enums::{
    booking_statuses::BookingStatus, booking_types::BookingType,
};
use crate::domain::entities::bookings::{InsertBookingEntity, UpdateBookingEntity};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("trip not found")]
    TripNotFound,
    #[error("booking not found")]
    BookingNotFound,
    #[error("price must not be negative")]
    NegativePrice,
    #[error("bookings are confirmed through payment, not direct updates")]
    ConfirmViaPayment,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BookingError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            BookingError::TripNotFound | BookingError::BookingNotFound => StatusCode::NOT_FOUND,
            BookingError::NegativePrice | BookingError::ConfirmViaPayment => {
                StatusCode::BAD_REQUEST
            }
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, BookingError>;

pub struct BookingUseCase<B, T>
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    bookings_repository: Arc<B>,
    trips_repository: Arc<T>,
}

impl<B, T> BookingUseCase<B, T>
where
    B: BookingsRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    pub fn new(bookings_repository: Arc<B>, trips_repository: Arc<T>) -> Self {
        Self {
            bookings_repository,
            trips_repository,
        }
    }

    /// Creates a booking in pending status. A caller-supplied status is
    /// ignored: only a paid charge can confirm a booking.
    pub async fn create(
        &self,
        user_id: Uuid,
        new_booking: NewBookingModel,
    ) -> UseCaseResult<BookingModel> {
        if new_booking.price_minor < 0 {
            return Err(BookingError::NegativePrice);
        }

        self.trips_repository
            .find_by_id_for_user(new_booking.trip_id, user_id)
            .await
            .map_err(BookingError::Internal)?
            .ok_or(BookingError::TripNotFound)?;

        if let Some(requested) = new_booking.status {
            if requested != BookingStatus::Pending {
                warn!(
                    %user_id,
                    trip_id = %new_booking.trip_id,
                    requested_status = %requested,
                    "bookings: caller-supplied status ignored, forcing pending"
                );
            }
        }

        let booking_type = new_booking.details.booking_type();
        let insert_entity = InsertBookingEntity {
            trip_id: new_booking.trip_id,
            booking_type: booking_type.to_string(),
            title: new_booking.title,
            description: new_booking.description,
            price_minor: new_booking.price_minor,
            start_date: new_booking.start_date,
            end_date: new_booking.end_date,
            status: BookingStatus::Pending.to_string(),
            details: serde_json::to_value(&new_booking.details)
                .map_err(|err| BookingError::Internal(err.into()))?,
            notes: new_booking.notes,
        };

        let entity = self
            .bookings_repository
            .create(insert_entity)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "bookings: create failed");
                BookingError::Internal(err)
            })?;

        info!(
            %user_id,
            booking_id = %entity.id,
            booking_type = %booking_type,
            price_minor = entity.price_minor,
            "bookings: created pending booking"
        );

        Ok(BookingModel::from(entity))
    }

    pub async fn get(&self, booking_id: Uuid, user_id: Uuid) -> UseCaseResult<BookingModel> {
        let entity = self
            .bookings_repository
            .find_by_id_for_user(booking_id, user_id)
            .await
            .map_err(BookingError::Internal)?
            .ok_or(BookingError::BookingNotFound)?;
        Ok(BookingModel::from(entity))
    }

    pub async fn update(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
        update_model: UpdateBookingModel,
    ) -> UseCaseResult<BookingModel> {
        if update_model.status == Some(BookingStatus::Confirmed) {
            return Err(BookingError::ConfirmViaPayment);
        }

        let changes = UpdateBookingEntity {
            title: update_model.title,
            description: update_model.description,
            start_date: update_model.start_date,
            end_date: update_model.end_date,
            status: update_model.status.map(|status| status.to_string()),
            notes: update_model.notes,
        };

        let entity = self
            .bookings_repository
            .update(booking_id, user_id, changes)
            .await
            .map_err(BookingError::Internal)?
            .ok_or(BookingError::BookingNotFound)?;
        Ok(BookingModel::from(entity))
    }

    pub async fn delete(&self, booking_id: Uuid, user_id: Uuid) -> UseCaseResult<()> {
        let deleted = self
            .bookings_repository
            .delete(booking_id, user_id)
            .await
            .map_err(BookingError::Internal)?;
        if !deleted {
            return Err(BookingError::BookingNotFound);
        }
        info!(%user_id, %booking_id, "bookings: deleted");
        Ok(())
    }

    pub async fn list_by_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        booking_type: Option<BookingType>,
    ) -> UseCaseResult<Vec<BookingModel>> {
        let entities = self
            .bookings_repository
            .list_by_trip(
                trip_id,
                user_id,
                booking_type.map(|booking_type| booking_type.to_string()),
            )
            .await
            .map_err(BookingError::Internal)?;
        Ok(entities.into_iter().map(BookingModel::from).collect())
    }

    pub async fn trip_total(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> UseCaseResult<TripBookingsTotalModel> {
        let total_minor = self
            .bookings_repository
            .trip_total(trip_id, user_id)
            .await
            .map_err(BookingError::Internal)?;
        Ok(TripBookingsTotalModel {
            trip_id,
            total_minor,
        })
    }

    pub async fn trip_summary(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> UseCaseResult<TripBookingsSummaryModel> {
        let bookings = self.list_by_trip(trip_id, user_id, None).await?;

        let mut by_type: Vec<BookingTypeSummaryModel> = Vec::new();
        for booking in &bookings {
            match by_type
                .iter_mut()
                .find(|summary| summary.booking_type == booking.booking_type)
            {
                Some(summary) => {
                    summary.count += 1;
                    summary.total_minor += booking.price_minor;
                }
                None => by_type.push(BookingTypeSummaryModel {
                    booking_type: booking.booking_type,
                    count: 1,
                    total_minor: booking.price_minor,
                }),
            }
        }

        let total_minor = by_type.iter().map(|summary| summary.total_minor).sum();
        Ok(TripBookingsSummaryModel {
            trip_id,
            by_type,
            total_minor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use crate::domain::entities::bookings::BookingEntity;
    use crate::domain::entities::trips::TripEntity;
    use crate::domain::repositories::bookings::MockBookingsRepository;
    use crate::domain::repositories::trips::MockTripsRepository;
    use crate::domain::value_objects::bookings::{BookingDetails, HotelDetails};

    fn sample_trip(trip_id: Uuid, user_id: Uuid) -> TripEntity {
        let now = Utc::now();
        TripEntity {
            id: trip_id,
            user_id,
            destination: "Chiang Mai".to_string(),
            country: Some("Thailand".to_string()),
            start_date: now.date_naive(),
            end_date: now.date_naive(),
            budget_minor: 2_000_000,
            status: "planning".to_string(),
            itinerary: None,
            ai_suggestions: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn new_hotel_booking(trip_id: Uuid, status: Option<BookingStatus>) -> NewBookingModel {
        NewBookingModel {
            trip_id,
            title: "Riverside Hotel".to_string(),
            description: None,
            price_minor: 600_000,
            start_date: Utc::now().date_naive(),
            end_date: None,
            details: BookingDetails::Hotel(HotelDetails {
                nights: Some(2),
                ..HotelDetails::default()
            }),
            notes: None,
            status,
        }
    }

    fn entity_from_insert(insert: &InsertBookingEntity) -> BookingEntity {
        BookingEntity {
            id: Uuid::new_v4(),
            trip_id: insert.trip_id,
            booking_type: insert.booking_type.clone(),
            title: insert.title.clone(),
            description: insert.description.clone(),
            price_minor: insert.price_minor,
            start_date: insert.start_date,
            end_date: insert.end_date,
            status: insert.status.clone(),
            details: insert.details.clone(),
            notes: insert.notes.clone(),
            charge_id: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn created_bookings_are_always_pending() {
        let trip_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let mut trips_repo = MockTripsRepository::new();
        trips_repo
            .expect_find_by_id_for_user()
            .returning(move |trip_id, user_id| {
                Box::pin(async move { Ok(Some(sample_trip(trip_id, user_id))) })
            });

        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo
            .expect_create()
            .withf(|insert| insert.status == "pending" && insert.booking_type == "hotel")
            .returning(|insert| {
                let entity = entity_from_insert(&insert);
                Box::pin(async move { Ok(entity) })
            });

        let usecase = BookingUseCase::new(Arc::new(bookings_repo), Arc::new(trips_repo));
        let booking = usecase
            .create(
                user_id,
                new_hotel_booking(trip_id, Some(BookingStatus::Confirmed)),
            )
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.booking_type, BookingType::Hotel);
    }

    #[tokio::test]
    async fn create_rejects_unknown_trip() {
        let mut trips_repo = MockTripsRepository::new();
        trips_repo
            .expect_find_by_id_for_user()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo.expect_create().times(0);

        let usecase = BookingUseCase::new(Arc::new(bookings_repo), Arc::new(trips_repo));
        let result = usecase
            .create(Uuid::new_v4(), new_hotel_booking(Uuid::new_v4(), None))
            .await;

        assert!(matches!(result, Err(BookingError::TripNotFound)));
    }

    #[tokio::test]
    async fn update_cannot_confirm_directly() {
        let trips_repo = MockTripsRepository::new();
        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo.expect_update().times(0);

        let usecase = BookingUseCase::new(Arc::new(bookings_repo), Arc::new(trips_repo));
        let result = usecase
            .update(
                Uuid::new_v4(),
                Uuid::new_v4(),
                UpdateBookingModel {
                    status: Some(BookingStatus::Confirmed),
                    ..UpdateBookingModel::default()
                },
            )
            .await;

        assert!(matches!(result, Err(BookingError::ConfirmViaPayment)));
    }

    #[tokio::test]
    async fn trip_summary_groups_by_type() {
        let trip_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let entities = vec![
            BookingEntity {
                id: Uuid::new_v4(),
                trip_id,
                booking_type: "hotel".to_string(),
                title: "Hotel A".to_string(),
                description: None,
                price_minor: 300_000,
                start_date: Utc::now().date_naive(),
                end_date: None,
                status: "pending".to_string(),
                details: json!({ "type": "hotel" }),
                notes: None,
                charge_id: None,
                created_at: Utc::now(),
            },
            BookingEntity {
                id: Uuid::new_v4(),
                trip_id,
                booking_type: "hotel".to_string(),
                title: "Hotel B".to_string(),
                description: None,
                price_minor: 200_000,
                start_date: Utc::now().date_naive(),
                end_date: None,
                status: "pending".to_string(),
                details: json!({ "type": "hotel" }),
                notes: None,
                charge_id: None,
                created_at: Utc::now(),
            },
            BookingEntity {
                id: Uuid::new_v4(),
                trip_id,
                booking_type: "restaurant".to_string(),
                title: "Dinner".to_string(),
                description: None,
                price_minor: 0,
                start_date: Utc::now().date_naive(),
                end_date: None,
                status: "pending".to_string(),
                details: json!({ "type": "restaurant" }),
                notes: None,
                charge_id: None,
                created_at: Utc::now(),
            },
        ];

        let trips_repo = MockTripsRepository::new();
        let mut bookings_repo = MockBookingsRepository::new();
        bookings_repo.expect_list_by_trip().returning(move |_, _, _| {
            let entities = entities.clone();
            Box::pin(async move { Ok(entities) })
        });

        let usecase = BookingUseCase::new(Arc::new(bookings_repo), Arc::new(trips_repo));
        let summary = usecase.trip_summary(trip_id, user_id).await.unwrap();

        assert_eq!(summary.total_minor, 500_000);
        let hotels = summary
            .by_type
            .iter()
            .find(|entry| entry.booking_type == BookingType::Hotel)
            .unwrap();
        assert_eq!(hotels.count, 2);
        assert_eq!(hotels.total_minor, 500_000);
    }
}
