use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::entities::trips::{InsertTripEntity, UpdateTripEntity};
use crate::domain::repositories::trips::TripsRepository;
use crate::domain::value_objects::enums::trip_statuses::TripStatus;
use crate::domain::value_objects::trips::{
    NewTripModel, TripCountModel, TripModel, TripStatsModel, TripStatusCountModel, UpdateTripModel,
};

#[derive(Debug, Error)]
pub enum TripError {
    #[error("trip not found")]
    NotFound,
    #[error("end date is before start date")]
    InvalidDateRange,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl TripError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            TripError::NotFound => StatusCode::NOT_FOUND,
            TripError::InvalidDateRange => StatusCode::BAD_REQUEST,
            TripError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, TripError>;

pub struct TripUseCase<T>
where
    T: TripsRepository + Send + Sync + 'static,
{
    trips_repository: Arc<T>,
}

impl<T> TripUseCase<T>
where
    T: TripsRepository + Send + Sync + 'static,
{
    pub fn new(trips_repository: Arc<T>) -> Self {
        Self { trips_repository }
    }

    pub async fn create(&self, user_id: Uuid, new_trip: NewTripModel) -> UseCaseResult<TripModel> {
        if new_trip.end_date < new_trip.start_date {
            return Err(TripError::InvalidDateRange);
        }

        let entity = self
            .trips_repository
            .create(InsertTripEntity {
                user_id,
                destination: new_trip.destination,
                country: new_trip.country,
                start_date: new_trip.start_date,
                end_date: new_trip.end_date,
                budget_minor: new_trip.budget_minor,
                status: TripStatus::Planning.to_string(),
                notes: new_trip.notes,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "trips: create failed");
                TripError::Internal(err)
            })?;

        info!(%user_id, trip_id = %entity.id, "trips: created");
        Ok(TripModel::from(entity))
    }

    pub async fn list(&self, user_id: Uuid) -> UseCaseResult<Vec<TripModel>> {
        let entities = self
            .trips_repository
            .list_by_user(user_id)
            .await
            .map_err(TripError::Internal)?;
        Ok(entities.into_iter().map(TripModel::from).collect())
    }

    pub async fn get(&self, trip_id: Uuid, user_id: Uuid) -> UseCaseResult<TripModel> {
        let entity = self
            .trips_repository
            .find_by_id_for_user(trip_id, user_id)
            .await
            .map_err(TripError::Internal)?
            .ok_or(TripError::NotFound)?;
        Ok(TripModel::from(entity))
    }

    pub async fn update(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        update_model: UpdateTripModel,
    ) -> UseCaseResult<TripModel> {
        if let (Some(start), Some(end)) = (update_model.start_date, update_model.end_date) {
            if end < start {
                return Err(TripError::InvalidDateRange);
            }
        }

        let changes = UpdateTripEntity {
            destination: update_model.destination,
            country: update_model.country,
            start_date: update_model.start_date,
            end_date: update_model.end_date,
            budget_minor: update_model.budget_minor,
            status: update_model.status.map(|status| status.to_string()),
            itinerary: update_model.itinerary,
            ai_suggestions: update_model.ai_suggestions,
            notes: update_model.notes,
            updated_at: Some(chrono::Utc::now()),
        };

        let entity = self
            .trips_repository
            .update(trip_id, user_id, changes)
            .await
            .map_err(TripError::Internal)?
            .ok_or(TripError::NotFound)?;
        Ok(TripModel::from(entity))
    }

    pub async fn delete(&self, trip_id: Uuid, user_id: Uuid) -> UseCaseResult<()> {
        let deleted = self
            .trips_repository
            .delete(trip_id, user_id)
            .await
            .map_err(TripError::Internal)?;
        if !deleted {
            return Err(TripError::NotFound);
        }
        info!(%user_id, %trip_id, "trips: deleted");
        Ok(())
    }

    pub async fn count(&self, user_id: Uuid) -> UseCaseResult<TripCountModel> {
        let count = self
            .trips_repository
            .count_by_user(user_id)
            .await
            .map_err(TripError::Internal)?;
        Ok(TripCountModel { count })
    }

    pub async fn stats(&self, user_id: Uuid) -> UseCaseResult<TripStatsModel> {
        let status_counts = self
            .trips_repository
            .status_counts(user_id)
            .await
            .map_err(TripError::Internal)?;
        let total_budget_minor = self
            .trips_repository
            .total_budget(user_id)
            .await
            .map_err(TripError::Internal)?;

        let by_status: Vec<TripStatusCountModel> = status_counts
            .into_iter()
            .map(|(status, count)| TripStatusCountModel {
                status: TripStatus::from_str(&status),
                count,
            })
            .collect();
        let total = by_status.iter().map(|entry| entry.count).sum();

        Ok(TripStatsModel {
            total,
            by_status,
            total_budget_minor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::repositories::trips::MockTripsRepository;

    #[tokio::test]
    async fn create_rejects_inverted_date_range() {
        let mut trips_repo = MockTripsRepository::new();
        trips_repo.expect_create().times(0);

        let usecase = TripUseCase::new(Arc::new(trips_repo));
        let result = usecase
            .create(
                Uuid::new_v4(),
                NewTripModel {
                    destination: "Phuket".to_string(),
                    country: Some("Thailand".to_string()),
                    start_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                    budget_minor: 1_000_000,
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(TripError::InvalidDateRange)));
    }

    #[tokio::test]
    async fn stats_sums_status_counts() {
        let mut trips_repo = MockTripsRepository::new();
        trips_repo.expect_status_counts().returning(|_| {
            Box::pin(async {
                Ok(vec![
                    ("planning".to_string(), 2),
                    ("completed".to_string(), 3),
                ])
            })
        });
        trips_repo
            .expect_total_budget()
            .returning(|_| Box::pin(async { Ok(5_500_000) }));

        let usecase = TripUseCase::new(Arc::new(trips_repo));
        let stats = usecase.stats(Uuid::new_v4()).await.unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.total_budget_minor, 5_500_000);
        assert!(stats.by_status.contains(&TripStatusCountModel {
            status: TripStatus::Completed,
            count: 3,
        }));
    }
}
