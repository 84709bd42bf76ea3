use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::expenses::ExpenseEntity;
use crate::domain::value_objects::enums::expense_categories::ExpenseCategory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseModel {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub amount_minor: i64,
    pub category: ExpenseCategory,
    pub spent_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ExpenseEntity> for ExpenseModel {
    fn from(entity: ExpenseEntity) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            title: entity.title,
            amount_minor: entity.amount_minor,
            category: ExpenseCategory::from_str(&entity.category),
            spent_on: entity.spent_on,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpenseModel {
    pub trip_id: Uuid,
    pub title: String,
    pub amount_minor: i64,
    pub category: ExpenseCategory,
    pub spent_on: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExpenseModel {
    pub title: Option<String>,
    pub amount_minor: Option<i64>,
    pub category: Option<ExpenseCategory>,
    pub spent_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotalModel {
    pub category: ExpenseCategory,
    pub total_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripExpensesSummaryModel {
    pub trip_id: Uuid,
    pub by_category: Vec<CategoryTotalModel>,
    pub total_minor: i64,
}
