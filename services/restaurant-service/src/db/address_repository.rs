// /restaurant/services/restaurant-service/src/db/address_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{Address, AddressRequest};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Address";
const COLUMNS: &str =
    "a.id, a.line1, a.line2, a.pin_code, a.city, a.state, a.country, a.created_at, a.updated_at, a.deleted_at";

pub struct AddressRepository;

impl AddressRepository {
    pub async fn create<'c, E>(executor: E, request: &AddressRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar(
                "INSERT INTO address (line1, line2, pin_code, city, state, country)
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
            )
            .bind(request.line1.trim())
            .bind(request.line2.trim())
            .bind(request.pin_code.trim())
            .bind(&request.city)
            .bind(&request.state)
            .bind(&request.country),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<Address>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM address a WHERE a.id = $1 AND a.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, Address>(&sql).bind(id), ENTITY).await
    }

    /// Alamat terakhir yang terhubung ke user
    pub async fn get_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<Address>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM address a
             INNER JOIN user_address ua ON ua.address_id = a.id
             WHERE ua.users_id = $1 AND ua.deleted_at IS NULL AND a.deleted_at IS NULL
             ORDER BY ua.created_at DESC
             LIMIT 1"
        );
        gateway::query_one(executor, sqlx::query_as::<_, Address>(&sql).bind(user_id), ENTITY).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<Address>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM address a WHERE ($1 OR a.deleted_at IS NULL) ORDER BY a.created_at");
        gateway::query_many(executor, sqlx::query_as::<_, Address>(&sql).bind(include_deleted)).await
    }

    pub async fn update<'c, E>(executor: E, id: Uuid, request: &AddressRequest) -> AppResult<Address>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE address a
             SET line1 = $2, line2 = $3, pin_code = $4, city = $5, state = $6, country = $7, updated_at = NOW()
             WHERE a.id = $1 AND a.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, Address>(&sql)
                .bind(id)
                .bind(request.line1.trim())
                .bind(request.line2.trim())
                .bind(request.pin_code.trim())
                .bind(&request.city)
                .bind(&request.state)
                .bind(&request.country),
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
            sqlx::query("UPDATE address SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }

    /// Soft delete semua alamat milik user, return jumlah row
    pub async fn soft_delete_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<u64>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute(
            executor,
            sqlx::query(
                "UPDATE address SET deleted_at = NOW()
                 WHERE deleted_at IS NULL
                   AND id IN (SELECT address_id FROM user_address WHERE users_id = $1 AND deleted_at IS NULL)",
            )
            .bind(user_id),
        )
        .await
    }
}
