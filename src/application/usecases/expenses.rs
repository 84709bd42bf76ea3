use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::entities::expenses::{InsertExpenseEntity, UpdateExpenseEntity};
use crate::domain::repositories::{expenses::ExpensesRepository, trips::TripsRepository};
use crate::domain::value_objects::enums::expense_categories::ExpenseCategory;
use crate::domain::value_objects::expenses::{
    CategoryTotalModel, ExpenseModel, NewExpenseModel, TripExpensesSummaryModel,
    UpdateExpenseModel,
};

#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("trip not found")]
    TripNotFound,
    #[error("expense not found")]
    ExpenseNotFound,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ExpenseError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ExpenseError::TripNotFound | ExpenseError::ExpenseNotFound => StatusCode::NOT_FOUND,
            ExpenseError::NegativeAmount => StatusCode::BAD_REQUEST,
            ExpenseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ExpenseError>;

pub struct ExpenseUseCase<E, T>
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    expenses_repository: Arc<E>,
    trips_repository: Arc<T>,
}

impl<E, T> ExpenseUseCase<E, T>
where
    E: ExpensesRepository + Send + Sync + 'static,
    T: TripsRepository + Send + Sync + 'static,
{
    pub fn new(expenses_repository: Arc<E>, trips_repository: Arc<T>) -> Self {
        Self {
            expenses_repository,
            trips_repository,
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        new_expense: NewExpenseModel,
    ) -> UseCaseResult<ExpenseModel> {
        if new_expense.amount_minor < 0 {
            return Err(ExpenseError::NegativeAmount);
        }

        self.trips_repository
            .find_by_id_for_user(new_expense.trip_id, user_id)
            .await
            .map_err(ExpenseError::Internal)?
            .ok_or(ExpenseError::TripNotFound)?;

        let entity = self
            .expenses_repository
            .create(InsertExpenseEntity {
                trip_id: new_expense.trip_id,
                title: new_expense.title,
                amount_minor: new_expense.amount_minor,
                category: new_expense.category.to_string(),
                spent_on: new_expense.spent_on,
                notes: new_expense.notes,
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "expenses: create failed");
                ExpenseError::Internal(err)
            })?;

        info!(%user_id, expense_id = %entity.id, "expenses: created");
        Ok(ExpenseModel::from(entity))
    }

    pub async fn list_by_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        category: Option<ExpenseCategory>,
    ) -> UseCaseResult<Vec<ExpenseModel>> {
        let entities = self
            .expenses_repository
            .list_by_trip(
                trip_id,
                user_id,
                category.map(|category| category.to_string()),
            )
            .await
            .map_err(ExpenseError::Internal)?;
        Ok(entities.into_iter().map(ExpenseModel::from).collect())
    }

    pub async fn update(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
        update_model: UpdateExpenseModel,
    ) -> UseCaseResult<ExpenseModel> {
        if let Some(amount) = update_model.amount_minor {
            if amount < 0 {
                return Err(ExpenseError::NegativeAmount);
            }
        }

        let changes = UpdateExpenseEntity {
            title: update_model.title,
            amount_minor: update_model.amount_minor,
            category: update_model.category.map(|category| category.to_string()),
            spent_on: update_model.spent_on,
            notes: update_model.notes,
        };

        let entity = self
            .expenses_repository
            .update(expense_id, user_id, changes)
            .await
            .map_err(ExpenseError::Internal)?
            .ok_or(ExpenseError::ExpenseNotFound)?;
        Ok(ExpenseModel::from(entity))
    }

    pub async fn delete(&self, expense_id: Uuid, user_id: Uuid) -> UseCaseResult<()> {
        let deleted = self
            .expenses_repository
            .delete(expense_id, user_id)
            .await
            .map_err(ExpenseError::Internal)?;
        if !deleted {
            return Err(ExpenseError::ExpenseNotFound);
        }
        Ok(())
    }

    pub async fn trip_summary(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
    ) -> UseCaseResult<TripExpensesSummaryModel> {
        let totals = self
            .expenses_repository
            .category_totals(trip_id, user_id)
            .await
            .map_err(ExpenseError::Internal)?;

        let by_category: Vec<CategoryTotalModel> = totals
            .into_iter()
            .map(|(category, total_minor)| CategoryTotalModel {
                category: ExpenseCategory::from_str(&category),
                total_minor,
            })
            .collect();
        let total_minor = by_category.iter().map(|entry| entry.total_minor).sum();

        Ok(TripExpensesSummaryModel {
            trip_id,
            by_category,
            total_minor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::repositories::expenses::MockExpensesRepository;
    use crate::domain::repositories::trips::MockTripsRepository;

    #[tokio::test]
    async fn summary_totals_all_categories() {
        let trips_repo = MockTripsRepository::new();
        let mut expenses_repo = MockExpensesRepository::new();
        expenses_repo.expect_category_totals().returning(|_, _| {
            Box::pin(async {
                Ok(vec![
                    ("food".to_string(), 45_000),
                    ("transport".to_string(), 12_000),
                ])
            })
        });

        let usecase = ExpenseUseCase::new(Arc::new(expenses_repo), Arc::new(trips_repo));
        let summary = usecase
            .trip_summary(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(summary.total_minor, 57_000);
        assert!(summary.by_category.contains(&CategoryTotalModel {
            category: ExpenseCategory::Food,
            total_minor: 45_000,
        }));
    }

    #[tokio::test]
    async fn create_rejects_negative_amount() {
        let trips_repo = MockTripsRepository::new();
        let mut expenses_repo = MockExpensesRepository::new();
        expenses_repo.expect_create().times(0);

        let usecase = ExpenseUseCase::new(Arc::new(expenses_repo), Arc::new(trips_repo));
        let result = usecase
            .create(
                Uuid::new_v4(),
                NewExpenseModel {
                    trip_id: Uuid::new_v4(),
                    title: "Dinner".to_string(),
                    amount_minor: -500,
                    category: ExpenseCategory::Food,
                    spent_on: chrono::Utc::now().date_naive(),
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ExpenseError::NegativeAmount)));
    }
}
