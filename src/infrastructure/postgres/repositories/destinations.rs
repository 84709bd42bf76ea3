use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::destinations::DestinationEntity;
use crate::domain::repositories::destinations::DestinationsRepository;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::destinations};

pub struct DestinationPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl DestinationPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DestinationsRepository for DestinationPostgres {
    async fn list_active(
        &self,
        query: Option<String>,
        limit: i64,
    ) -> Result<Vec<DestinationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut select = destinations::table
            .filter(destinations::is_active.eq(true))
            .select(DestinationEntity::as_select())
            .order(destinations::popularity.desc())
            .limit(limit)
            .into_boxed();

        if let Some(q) = query {
            let pattern = format!("%{}%", q);
            select = select.filter(
                destinations::name
                    .ilike(pattern.clone())
                    .or(destinations::country.ilike(pattern)),
            );
        }

        let results = select.load::<DestinationEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, destination_id: Uuid) -> Result<Option<DestinationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = destinations::table
            .find(destination_id)
            .select(DestinationEntity::as_select())
            .first::<DestinationEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn search_by_tag(
        &self,
        tag: &str,
        query: Option<String>,
        limit: i64,
    ) -> Result<Vec<DestinationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut select = destinations::table
            .filter(destinations::is_active.eq(true))
            .filter(destinations::activity_tags.contains(json!([tag])))
            .select(DestinationEntity::as_select())
            .order(destinations::popularity.desc())
            .limit(limit)
            .into_boxed();

        if let Some(q) = query {
            let pattern = format!("%{}%", q);
            select = select.filter(
                destinations::name
                    .ilike(pattern.clone())
                    .or(destinations::country.ilike(pattern)),
            );
        }

        let results = select.load::<DestinationEntity>(&mut conn)?;

        Ok(results)
    }
}
