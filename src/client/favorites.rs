use std::sync::Arc;

use uuid::Uuid;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::favorites::{FavoriteModel, InsertFavoriteModel};

pub struct FavoritesClient {
    api: Arc<ApiClient>,
}

impl FavoritesClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn add(&self, destination_id: Uuid) -> Result<FavoriteModel, ApiError> {
        let response = self
            .api
            .post::<_, FavoriteModel>(
                "api/v1/favorites",
                &InsertFavoriteModel { destination_id },
            )
            .await?;
        Ok(response.data)
    }

    pub async fn list(&self) -> Result<Vec<FavoriteModel>, ApiError> {
        let response = self.api.get::<Vec<FavoriteModel>>("api/v1/favorites").await?;
        Ok(response.data)
    }

    pub async fn remove(&self, favorite_id: Uuid) -> Result<(), ApiError> {
        self.api
            .delete::<serde_json::Value>(&format!("api/v1/favorites/{}", favorite_id))
            .await?;
        Ok(())
    }
}
