use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::users::{InsertUserEntity, UpdateUserEntity, UserEntity};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait UserRepository {
    async fn register(&self, insert_entity: InsertUserEntity) -> Result<UserEntity>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>>;
    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: UpdateUserEntity,
    ) -> Result<Option<UserEntity>>;
}
