// /restaurant/services/restaurant-service/src/db/order_item_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{OrderItem, OrderItemRequest};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Order item";
const COLUMNS: &str = "oi.id, oi.price, oi.quantity, oi.created_at, oi.updated_at, oi.deleted_at";

pub struct OrderItemRepository;

impl OrderItemRepository {
    pub async fn create<'c, E>(executor: E, request: &OrderItemRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar("INSERT INTO order_item (price, quantity) VALUES ($1, $2) RETURNING id")
                .bind(request.price)
                .bind(request.quantity),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<OrderItem>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM order_item oi WHERE oi.id = $1 AND oi.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, OrderItem>(&sql).bind(id), ENTITY).await
    }

    /// Semua item milik satu order, bisa kosong
    pub async fn get_by_order_id<'c, E>(executor: E, order_id: Uuid) -> AppResult<Vec<OrderItem>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM order_item oi
             INNER JOIN order_order_item ooi ON ooi.order_item_id = oi.id
             WHERE ooi.order_id = $1 AND ooi.deleted_at IS NULL AND oi.deleted_at IS NULL
             ORDER BY oi.created_at"
        );
        gateway::query_many(executor, sqlx::query_as::<_, OrderItem>(&sql).bind(order_id)).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<OrderItem>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM order_item oi WHERE ($1 OR oi.deleted_at IS NULL) ORDER BY oi.created_at");
        gateway::query_many(executor, sqlx::query_as::<_, OrderItem>(&sql).bind(include_deleted)).await
    }

    pub async fn update<'c, E>(executor: E, id: Uuid, request: &OrderItemRequest) -> AppResult<OrderItem>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE order_item oi SET price = $2, quantity = $3, updated_at = NOW()
             WHERE oi.id = $1 AND oi.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, OrderItem>(&sql)
                .bind(id)
                .bind(request.price)
                .bind(request.quantity),
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
            sqlx::query("UPDATE order_item SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }
}
