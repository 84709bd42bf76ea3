use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::expenses::{ExpenseEntity, InsertExpenseEntity, UpdateExpenseEntity};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait ExpensesRepository {
    async fn create(&self, insert_entity: InsertExpenseEntity) -> Result<ExpenseEntity>;
    async fn list_by_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        category: Option<String>,
    ) -> Result<Vec<ExpenseEntity>>;
    async fn update(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
        changes: UpdateExpenseEntity,
    ) -> Result<Option<ExpenseEntity>>;
    async fn delete(&self, expense_id: Uuid, user_id: Uuid) -> Result<bool>;
    async fn category_totals(&self, trip_id: Uuid, user_id: Uuid) -> Result<Vec<(String, i64)>>;
}
