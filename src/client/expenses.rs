use std::sync::Arc;

use uuid::Uuid;

use crate::client::http::{ApiClient, ApiError};
use crate::domain::value_objects::enums::expense_categories::ExpenseCategory;
use crate::domain::value_objects::expenses::{
    ExpenseModel, NewExpenseModel, TripExpensesSummaryModel, UpdateExpenseModel,
};

pub struct ExpensesClient {
    api: Arc<ApiClient>,
}

impl ExpensesClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn create(&self, new_expense: &NewExpenseModel) -> Result<ExpenseModel, ApiError> {
        let response = self
            .api
            .post::<_, ExpenseModel>("api/v1/expenses", new_expense)
            .await?;
        Ok(response.data)
    }

    pub async fn list_by_trip(
        &self,
        trip_id: Uuid,
        category: Option<ExpenseCategory>,
    ) -> Result<Vec<ExpenseModel>, ApiError> {
        let path = match category {
            Some(category) => format!("api/v1/expenses/trip/{}?category={}", trip_id, category),
            None => format!("api/v1/expenses/trip/{}", trip_id),
        };
        let response = self.api.get::<Vec<ExpenseModel>>(&path).await?;
        Ok(response.data)
    }

    pub async fn trip_summary(&self, trip_id: Uuid) -> Result<TripExpensesSummaryModel, ApiError> {
        let response = self
            .api
            .get::<TripExpensesSummaryModel>(&format!("api/v1/expenses/trip/{}/summary", trip_id))
            .await?;
        Ok(response.data)
    }

    pub async fn update(
        &self,
        expense_id: Uuid,
        update_model: &UpdateExpenseModel,
    ) -> Result<ExpenseModel, ApiError> {
        let response = self
            .api
            .patch::<_, ExpenseModel>(&format!("api/v1/expenses/{}", expense_id), update_model)
            .await?;
        Ok(response.data)
    }

    pub async fn delete(&self, expense_id: Uuid) -> Result<(), ApiError> {
        self.api
            .delete::<serde_json::Value>(&format!("api/v1/expenses/{}", expense_id))
            .await?;
        Ok(())
    }
}
