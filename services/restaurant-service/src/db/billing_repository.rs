// /restaurant/services/restaurant-service/src/db/billing_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{Billing, BillingRequest};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Billing";
const COLUMNS: &str = "bl.id, bl.type, bl.mode, bl.created_at, bl.updated_at, bl.deleted_at";

pub struct BillingRepository;

impl BillingRepository {
    pub async fn create<'c, E>(executor: E, request: &BillingRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar("INSERT INTO billing (type, mode) VALUES ($1, $2) RETURNING id")
                .bind(request.kind)
                .bind(&request.mode),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<Billing>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM billing bl WHERE bl.id = $1 AND bl.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, Billing>(&sql).bind(id), ENTITY).await
    }

    /// Billing terakhir yang terhubung ke user
    pub async fn get_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<Billing>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM billing bl
             INNER JOIN user_billing ub ON ub.billing_id = bl.id
             WHERE ub.users_id = $1 AND ub.deleted_at IS NULL AND bl.deleted_at IS NULL
             ORDER BY ub.created_at DESC
             LIMIT 1"
        );
        gateway::query_one(executor, sqlx::query_as::<_, Billing>(&sql).bind(user_id), ENTITY).await
    }

    /// Billing yang terhubung ke order
    pub async fn get_by_order_id<'c, E>(executor: E, order_id: Uuid) -> AppResult<Billing>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM billing bl
             INNER JOIN order_billing ob ON ob.billing_id = bl.id
             WHERE ob.order_id = $1 AND ob.deleted_at IS NULL AND bl.deleted_at IS NULL
             ORDER BY ob.created_at DESC
             LIMIT 1"
        );
        gateway::query_one(executor, sqlx::query_as::<_, Billing>(&sql).bind(order_id), ENTITY).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<Billing>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM billing bl WHERE ($1 OR bl.deleted_at IS NULL) ORDER BY bl.created_at");
        gateway::query_many(executor, sqlx::query_as::<_, Billing>(&sql).bind(include_deleted)).await
    }

    pub async fn update<'c, E>(executor: E, id: Uuid, request: &BillingRequest) -> AppResult<Billing>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE billing bl SET type = $2, mode = $3, updated_at = NOW()
             WHERE bl.id = $1 AND bl.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, Billing>(&sql)
                .bind(id)
                .bind(request.kind)
                .bind(&request.mode),
            ENTITY,
        )
        .await
    }

    pub async fn soft_delete<'c, E>(executor: E, id: Uuid) -> AppResult<()>
    where
        E: PgExecutor<'c>,
    {
        let affected = gateway::execute(
            executor,
            sqlx::query("UPDATE billing SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }

    /// Soft delete semua billing milik user, return jumlah row
    pub async fn soft_delete_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<u64>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute(
            executor,
            sqlx::query(
                "UPDATE billing SET deleted_at = NOW()
                 WHERE deleted_at IS NULL
                   AND id IN (SELECT billing_id FROM user_billing WHERE users_id = $1 AND deleted_at IS NULL)",
            )
            .bind(user_id),
        )
        .await
    }
}
