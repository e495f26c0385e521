//! PostgreSQL implementation of the house repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{House, HousePatch, NewHouse};
use crate::domain::repositories::HouseRepository;
use crate::error::AppError;

const HOUSE_COLUMNS: &str = "id, house_type, state, description, location, rooms, \
     available_rooms, bathrooms, price, long_lat, user_id, created_at, updated_at";

/// PostgreSQL repository for house listing storage and retrieval.
pub struct PgHouseRepository {
    pool: Arc<PgPool>,
}

impl PgHouseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HouseRepository for PgHouseRepository {
    async fn create(&self, new_house: NewHouse) -> Result<House, AppError> {
        let house = sqlx::query_as::<_, House>(&format!(
            r#"
            INSERT INTO houses
                (house_type, state, description, location, rooms,
                 available_rooms, bathrooms, price, long_lat, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {HOUSE_COLUMNS}
            "#
        ))
        .bind(&new_house.house_type)
        .bind(&new_house.state)
        .bind(&new_house.description)
        .bind(&new_house.location)
        .bind(new_house.rooms)
        .bind(new_house.available_rooms)
        .bind(new_house.bathrooms)
        .bind(new_house.price)
        .bind(&new_house.long_lat)
        .bind(new_house.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(house)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<House>, AppError> {
        let house =
            sqlx::query_as::<_, House>(&format!("SELECT {HOUSE_COLUMNS} FROM houses WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(house)
    }

    async fn list(&self) -> Result<Vec<House>, AppError> {
        let houses = sqlx::query_as::<_, House>(&format!(
            "SELECT {HOUSE_COLUMNS} FROM houses ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(houses)
    }

    async fn list_by_landlord(&self, user_id: i64) -> Result<Vec<House>, AppError> {
        let houses = sqlx::query_as::<_, House>(&format!(
            "SELECT {HOUSE_COLUMNS} FROM houses WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(houses)
    }

    async fn list_by_state(&self, state: &str) -> Result<Vec<House>, AppError> {
        let houses = sqlx::query_as::<_, House>(&format!(
            "SELECT {HOUSE_COLUMNS} FROM houses WHERE state = $1 ORDER BY created_at DESC"
        ))
        .bind(state)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(houses)
    }

    async fn update(&self, id: i64, patch: HousePatch) -> Result<House, AppError> {
        let house = sqlx::query_as::<_, House>(&format!(
            r#"
            UPDATE houses SET
                house_type  = COALESCE($2, house_type),
                state       = COALESCE($3, state),
                description = COALESCE($4, description),
                location    = COALESCE($5, location),
                rooms       = COALESCE($6, rooms),
                bathrooms   = COALESCE($7, bathrooms),
                price       = COALESCE($8, price),
                long_lat    = COALESCE($9, long_lat),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {HOUSE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.house_type)
        .bind(patch.state)
        .bind(patch.description)
        .bind(patch.location)
        .bind(patch.rooms)
        .bind(patch.bathrooms)
        .bind(patch.price)
        .bind(patch.long_lat)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(house)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM houses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict { .. } => AppError::conflict(
                    "House still has tenants",
                    json!({ "house_id": id }),
                ),
                other => other,
            })?;

        Ok(result.rows_affected() > 0)
    }
}
