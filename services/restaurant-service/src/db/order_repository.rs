// /restaurant/services/restaurant-service/src/db/order_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{Order, OrderRequest};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Order";
const COLUMNS: &str = "o.id, o.item_discount, o.tax, o.shipping, o.total, o.created_at, o.updated_at, o.deleted_at";

pub struct OrderRepository;

impl OrderRepository {
    pub async fn create<'c, E>(executor: E, request: &OrderRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar(
                "INSERT INTO orders (item_discount, tax, shipping, total) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(request.item_discount)
            .bind(request.tax)
            .bind(&request.shipping)
            .bind(request.total),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<Order>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM orders o WHERE o.id = $1 AND o.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, Order>(&sql).bind(id), ENTITY).await
    }

    /// Semua order milik user, terbaru dulu
    pub async fn get_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<Vec<Order>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM orders o
             INNER JOIN user_order uo ON uo.orders_id = o.id
             WHERE uo.users_id = $1 AND uo.deleted_at IS NULL AND o.deleted_at IS NULL
             ORDER BY o.created_at DESC"
        );
        gateway::query_many(executor, sqlx::query_as::<_, Order>(&sql).bind(user_id)).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<Order>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM orders o WHERE ($1 OR o.deleted_at IS NULL) ORDER BY o.created_at");
        gateway::query_many(executor, sqlx::query_as::<_, Order>(&sql).bind(include_deleted)).await
    }

    pub async fn update<'c, E>(executor: E, id: Uuid, request: &OrderRequest) -> AppResult<Order>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE orders o
             SET item_discount = $2, tax = $3, shipping = $4, total = $5, updated_at = NOW()
             WHERE o.id = $1 AND o.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, Order>(&sql)
                .bind(id)
                .bind(request.item_discount)
                .bind(request.tax)
                .bind(&request.shipping)
                .bind(request.total),
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
            sqlx::query("UPDATE orders SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }
}
