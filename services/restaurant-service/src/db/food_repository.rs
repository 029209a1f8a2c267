// /restaurant/services/restaurant-service/src/db/food_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{Food, FoodRequest};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Food";
const COLUMNS: &str = "f.id, f.name, f.price, f.type, f.created_at, f.updated_at, f.deleted_at";

pub struct FoodRepository;

impl FoodRepository {
    /// Menyimpan menu makanan baru, return id
    pub async fn create<'c, E>(executor: E, request: &FoodRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar("INSERT INTO food (name, price, type) VALUES ($1, $2, $3) RETURNING id")
                .bind(request.name.trim())
                .bind(request.price)
                .bind(&request.kind),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<Food>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM food f WHERE f.id = $1 AND f.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, Food>(&sql).bind(id), ENTITY).await
    }

    /// Makanan yang terhubung ke order item lewat order_item_food
    pub async fn get_by_order_item_id<'c, E>(executor: E, order_item_id: Uuid) -> AppResult<Food>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM food f
             INNER JOIN order_item_food oif ON oif.food_id = f.id
             WHERE oif.order_item_id = $1 AND oif.deleted_at IS NULL AND f.deleted_at IS NULL
             ORDER BY oif.created_at DESC
             LIMIT 1"
        );
        gateway::query_one(executor, sqlx::query_as::<_, Food>(&sql).bind(order_item_id), ENTITY).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<Food>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM food f WHERE ($1 OR f.deleted_at IS NULL) ORDER BY f.created_at");
        gateway::query_many(executor, sqlx::query_as::<_, Food>(&sql).bind(include_deleted)).await
    }

    /// Full replacement semua field
    pub async fn update<'c, E>(executor: E, id: Uuid, request: &FoodRequest) -> AppResult<Food>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE food f SET name = $2, price = $3, type = $4, updated_at = NOW()
             WHERE f.id = $1 AND f.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, Food>(&sql)
                .bind(id)
                .bind(request.name.trim())
                .bind(request.price)
                .bind(&request.kind),
            ENTITY,
        )
        .await
    }

    /// Soft delete, panggilan kedua tidak mengubah timestamp pertama
    pub async fn soft_delete<'c, E>(executor: E, id: Uuid) -> AppResult<()>
    where
        E: PgExecutor<'c>,
    {
        let affected = gateway::execute(
            executor,
            sqlx::query("UPDATE food SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }
}
