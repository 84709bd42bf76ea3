use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::destinations::DestinationEntity;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait DestinationsRepository {
    async fn list_active(
        &self,
        query: Option<String>,
        limit: i64,
    ) -> Result<Vec<DestinationEntity>>;
    async fn find_by_id(&self, destination_id: Uuid) -> Result<Option<DestinationEntity>>;
    /// Active destinations whose activity tags contain `tag`, optionally
    /// narrowed by a name/country substring.
    async fn search_by_tag(
        &self,
        tag: &str,
        query: Option<String>,
        limit: i64,
    ) -> Result<Vec<DestinationEntity>>;
}
