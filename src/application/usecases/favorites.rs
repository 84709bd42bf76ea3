use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::entities::favorites::InsertFavoriteEntity;
use crate::domain::repositories::{
    destinations::DestinationsRepository, favorites::FavoritesRepository,
};
use crate::domain::value_objects::favorites::{FavoriteModel, InsertFavoriteModel};

#[derive(Debug, Error)]
pub enum FavoriteError {
    #[error("destination not found")]
    DestinationNotFound,
    #[error("destination is already a favorite")]
    AlreadyFavorite,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl FavoriteError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            FavoriteError::DestinationNotFound | FavoriteError::FavoriteNotFound => {
                StatusCode::NOT_FOUND
            }
            FavoriteError::AlreadyFavorite => StatusCode::CONFLICT,
            FavoriteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, FavoriteError>;

pub struct FavoriteUseCase<F, D>
where
    F: FavoritesRepository + Send + Sync + 'static,
    D: DestinationsRepository + Send + Sync + 'static,
{
    favorites_repository: Arc<F>,
    destinations_repository: Arc<D>,
}

impl<F, D> FavoriteUseCase<F, D>
where
    F: FavoritesRepository + Send + Sync + 'static,
    D: DestinationsRepository + Send + Sync + 'static,
{
    pub fn new(favorites_repository: Arc<F>, destinations_repository: Arc<D>) -> Self {
        Self {
            favorites_repository,
            destinations_repository,
        }
    }

    pub async fn add(
        &self,
        user_id: Uuid,
        insert_model: InsertFavoriteModel,
    ) -> UseCaseResult<FavoriteModel> {
        self.destinations_repository
            .find_by_id(insert_model.destination_id)
            .await
            .map_err(FavoriteError::Internal)?
            .ok_or(FavoriteError::DestinationNotFound)?;

        if self
            .favorites_repository
            .find(user_id, insert_model.destination_id)
            .await
            .map_err(FavoriteError::Internal)?
            .is_some()
        {
            return Err(FavoriteError::AlreadyFavorite);
        }

        let entity = self
            .favorites_repository
            .insert(InsertFavoriteEntity {
                user_id,
                destination_id: insert_model.destination_id,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "favorites: insert failed");
                FavoriteError::Internal(err)
            })?;

        info!(%user_id, favorite_id = %entity.id, "favorites: added");
        Ok(FavoriteModel::from(entity))
    }

    pub async fn list(&self, user_id: Uuid) -> UseCaseResult<Vec<FavoriteModel>> {
        let entities = self
            .favorites_repository
            .list_by_user(user_id)
            .await
            .map_err(FavoriteError::Internal)?;
        Ok(entities.into_iter().map(FavoriteModel::from).collect())
    }

    pub async fn remove(&self, favorite_id: Uuid, user_id: Uuid) -> UseCaseResult<()> {
        let deleted = self
            .favorites_repository
            .delete(favorite_id, user_id)
            .await
            .map_err(FavoriteError::Internal)?;
        if !deleted {
            return Err(FavoriteError::FavoriteNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    use crate::domain::entities::destinations::DestinationEntity;
    use crate::domain::entities::favorites::FavoriteEntity;
    use crate::domain::repositories::destinations::MockDestinationsRepository;
    use crate::domain::repositories::favorites::MockFavoritesRepository;

    fn sample_destination(id: Uuid) -> DestinationEntity {
        let now = Utc::now();
        DestinationEntity {
            id,
            name: "Pai".to_string(),
            country: "Thailand".to_string(),
            description: "Mountain town".to_string(),
            image_url: "https://img.example/pai.jpg".to_string(),
            latitude: 19.36,
            longitude: 98.44,
            best_seasons: json!(["winter"]),
            activity_tags: json!(["hotel", "hiking"]),
            average_daily_cost_minor: 120_000,
            monthly_weather: json!([]),
            tags: json!(["nature"]),
            popularity: 70,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn duplicate_favorite_is_a_conflict() {
        let destination_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let mut destinations_repo = MockDestinationsRepository::new();
        destinations_repo.expect_find_by_id().returning(move |id| {
            Box::pin(async move { Ok(Some(sample_destination(id))) })
        });

        let mut favorites_repo = MockFavoritesRepository::new();
        favorites_repo.expect_find().returning(move |user_id, destination_id| {
            Box::pin(async move {
                Ok(Some(FavoriteEntity {
                    id: Uuid::new_v4(),
                    user_id,
                    destination_id,
                    created_at: Utc::now(),
                }))
            })
        });
        favorites_repo.expect_insert().times(0);

        let usecase = FavoriteUseCase::new(Arc::new(favorites_repo), Arc::new(destinations_repo));
        let result = usecase
            .add(user_id, InsertFavoriteModel { destination_id })
            .await;

        assert!(matches!(result, Err(FavoriteError::AlreadyFavorite)));
    }
}
