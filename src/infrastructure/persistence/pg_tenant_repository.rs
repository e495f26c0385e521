//! PostgreSQL implementation of the tenant booking repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTenant, Tenant};
use crate::domain::repositories::TenantRepository;
use crate::error::AppError;

const TENANT_COLUMNS: &str =
    "id, email, first_name, last_name, phone_number, house_id, created_at, updated_at";

/// PostgreSQL repository for tenant booking.
///
/// Booking couples the room decrement and the tenant insert in one
/// transaction. The decrement carries a `WHERE available_rooms > 0`
/// guard, so concurrent bookings on the last room serialize at the row
/// lock and only one can succeed.
pub struct PgTenantRepository {
    pool: Arc<PgPool>,
}

impl PgTenantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn book(&self, new_tenant: NewTenant) -> Result<Tenant, AppError> {
        let mut tx = self.pool.begin().await?;

        let decremented = sqlx::query(
            r#"
            UPDATE houses
            SET available_rooms = available_rooms - 1,
                updated_at = NOW()
            WHERE id = $1 AND available_rooms > 0
            "#,
        )
        .bind(new_tenant.house_id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            // Distinguish "house missing" from "house full".
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM houses WHERE id = $1)")
                    .bind(new_tenant.house_id)
                    .fetch_one(&mut *tx)
                    .await?;

            return Err(if exists {
                AppError::conflict(
                    "There are no available rooms",
                    json!({ "house_id": new_tenant.house_id }),
                )
            } else {
                AppError::not_found(
                    "House not found",
                    json!({ "house_id": new_tenant.house_id }),
                )
            });
        }

        let tenant = sqlx::query_as::<_, Tenant>(&format!(
            r#"
            INSERT INTO tenants (email, first_name, last_name, phone_number, house_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TENANT_COLUMNS}
            "#
        ))
        .bind(&new_tenant.email)
        .bind(&new_tenant.first_name)
        .bind(&new_tenant.last_name)
        .bind(&new_tenant.phone_number)
        .bind(new_tenant.house_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(tenant)
    }
}
