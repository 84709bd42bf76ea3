use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::expenses;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = expenses)]
pub struct ExpenseEntity {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub title: String,
    pub amount_minor: i64,
    pub category: String,
    pub spent_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = expenses)]
pub struct InsertExpenseEntity {
    pub trip_id: Uuid,
    pub title: String,
    pub amount_minor: i64,
    pub category: String,
    pub spent_on: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Default, Debug, Clone, AsChangeset)]
#[diesel(table_name = expenses)]
pub struct UpdateExpenseEntity {
    pub title: Option<String>,
    pub amount_minor: Option<i64>,
    pub category: Option<String>,
    pub spent_on: Option<NaiveDate>,
    pub notes: Option<String>,
}
