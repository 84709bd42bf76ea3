use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::domain::entities::expenses::{
    ExpenseEntity, InsertExpenseEntity, UpdateExpenseEntity,
};
use crate::domain::repositories::expenses::ExpensesRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{expenses, trips},
};

pub struct ExpensePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ExpensePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ExpensesRepository for ExpensePostgres {
    async fn create(&self, insert_entity: InsertExpenseEntity) -> Result<ExpenseEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(expenses::table)
            .values(&insert_entity)
            .returning(ExpenseEntity::as_returning())
            .get_result::<ExpenseEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list_by_trip(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        category: Option<String>,
    ) -> Result<Vec<ExpenseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = expenses::table
            .inner_join(trips::table)
            .filter(expenses::trip_id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .select(ExpenseEntity::as_select())
            .order(expenses::spent_on.desc())
            .into_boxed();

        if let Some(category) = category {
            query = query.filter(expenses::category.eq(category));
        }

        let results = query.load::<ExpenseEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
        changes: UpdateExpenseEntity,
    ) -> Result<Option<ExpenseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(expenses::table)
            .filter(expenses::id.eq(expense_id))
            .filter(expenses::trip_id.eq_any(
                trips::table
                    .filter(trips::user_id.eq(user_id))
                    .select(trips::id),
            ))
            .set(&changes)
            .returning(ExpenseEntity::as_returning())
            .get_result::<ExpenseEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, expense_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(expenses::table)
            .filter(expenses::id.eq(expense_id))
            .filter(expenses::trip_id.eq_any(
                trips::table
                    .filter(trips::user_id.eq(user_id))
                    .select(trips::id),
            ))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn category_totals(&self, trip_id: Uuid, user_id: Uuid) -> Result<Vec<(String, i64)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = expenses::table
            .inner_join(trips::table)
            .filter(expenses::trip_id.eq(trip_id))
            .filter(trips::user_id.eq(user_id))
            .select((expenses::category, expenses::amount_minor))
            .load::<(String, i64)>(&mut conn)?;

        let mut totals: BTreeMap<String, i64> = BTreeMap::new();
        for (category, amount_minor) in rows {
            *totals.entry(category).or_insert(0) += amount_minor;
        }

        Ok(totals.into_iter().collect())
    }
}
