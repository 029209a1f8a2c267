// /restaurant/services/restaurant-service/src/db/table_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{RestaurantTable, TableRequest, TableUpdate};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Table";
const COLUMNS: &str = "t.id, t.code, t.capacity, t.created_at, t.updated_at, t.deleted_at";

pub struct TableRepository;

impl TableRepository {
    /// Menyimpan meja baru, return id
    pub async fn create<'c, E>(executor: E, request: &TableRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar("INSERT INTO res_table (code, capacity) VALUES ($1, $2) RETURNING id")
                .bind(request.code)
                .bind(request.capacity),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<RestaurantTable>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM res_table t WHERE t.id = $1 AND t.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, RestaurantTable>(&sql).bind(id), ENTITY).await
    }

    /// Meja yang dipesan oleh booking tertentu
    pub async fn get_by_booking_id<'c, E>(executor: E, booking_id: Uuid) -> AppResult<RestaurantTable>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM res_table t
             INNER JOIN booking_table bt ON bt.rest_table_id = t.id
             WHERE bt.booking_id = $1 AND bt.deleted_at IS NULL AND t.deleted_at IS NULL
             ORDER BY bt.created_at DESC
             LIMIT 1"
        );
        gateway::query_one(executor, sqlx::query_as::<_, RestaurantTable>(&sql).bind(booking_id), ENTITY).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<RestaurantTable>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM res_table t WHERE ($1 OR t.deleted_at IS NULL) ORDER BY t.code");
        gateway::query_many(executor, sqlx::query_as::<_, RestaurantTable>(&sql).bind(include_deleted)).await
    }

    /// Partial update: field yang None tetap pakai nilai lama (COALESCE)
    pub async fn update<'c, E>(executor: E, id: Uuid, update: &TableUpdate) -> AppResult<RestaurantTable>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE res_table t
             SET code = COALESCE($2, t.code), capacity = COALESCE($3, t.capacity), updated_at = NOW()
             WHERE t.id = $1 AND t.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, RestaurantTable>(&sql)
                .bind(id)
                .bind(update.code)
                .bind(update.capacity),
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
            sqlx::query("UPDATE res_table SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }
}
