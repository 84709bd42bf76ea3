use std::sync::Arc;

use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::domain::repositories::destinations::DestinationsRepository;
use crate::domain::value_objects::destinations::{DestinationModel, DestinationSearchFilter};

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("destination not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DestinationError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            DestinationError::NotFound => StatusCode::NOT_FOUND,
            DestinationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, DestinationError>;

pub struct DestinationUseCase<D>
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    destinations_repository: Arc<D>,
}

impl<D> DestinationUseCase<D>
where
    D: DestinationsRepository + Send + Sync + 'static,
{
    pub fn new(destinations_repository: Arc<D>) -> Self {
        Self {
            destinations_repository,
        }
    }

    pub async fn list(
        &self,
        filter: DestinationSearchFilter,
    ) -> UseCaseResult<Vec<DestinationModel>> {
        let limit = clamp_limit(filter.limit);
        let entities = self
            .destinations_repository
            .list_active(filter.q, limit)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "destinations: list failed");
                DestinationError::Internal(err)
            })?;
        Ok(entities.into_iter().map(DestinationModel::from).collect())
    }

    pub async fn get(&self, destination_id: Uuid) -> UseCaseResult<DestinationModel> {
        let entity = self
            .destinations_repository
            .find_by_id(destination_id)
            .await
            .map_err(DestinationError::Internal)?
            .ok_or(DestinationError::NotFound)?;
        Ok(DestinationModel::from(entity))
    }

    /// Tag-scoped search backing the hotel/restaurant/flight lookups.
    pub async fn search_by_tag(
        &self,
        tag: &str,
        filter: DestinationSearchFilter,
    ) -> UseCaseResult<Vec<DestinationModel>> {
        let limit = clamp_limit(filter.limit);
        let entities = self
            .destinations_repository
            .search_by_tag(tag, filter.q, limit)
            .await
            .map_err(DestinationError::Internal)?;
        Ok(entities.into_iter().map(DestinationModel::from).collect())
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None), 50);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(500)), 100);
        assert_eq!(clamp_limit(Some(25)), 25);
    }
}
