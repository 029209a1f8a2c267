// /restaurant/services/restaurant-service/src/db/interest_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{Interest, InterestWithUser, NewInterest};
use crate::utils::AppResult;

const ENTITY: &str = "Interest";
const COLUMNS: &str = "i.id, i.name, i.type, i.created_at, i.updated_at, i.deleted_at";

pub struct InterestRepository;

impl InterestRepository {
    pub async fn create<'c, E>(executor: E, request: &NewInterest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar("INSERT INTO interest (name, type) VALUES ($1, $2) RETURNING id")
                .bind(request.name.trim())
                .bind(&request.kind),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<Interest>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM interest i WHERE i.id = $1 AND i.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, Interest>(&sql).bind(id), ENTITY).await
    }

    /// Interest yang terhubung ke user lewat relation_table
    pub async fn get_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<Interest>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM interest i
             INNER JOIN relation_table rt ON rt.interest_id = i.id
             WHERE rt.users_id = $1 AND rt.deleted_at IS NULL AND i.deleted_at IS NULL
             ORDER BY rt.created_at DESC
             LIMIT 1"
        );
        gateway::query_one(executor, sqlx::query_as::<_, Interest>(&sql).bind(user_id), ENTITY).await
    }

    /// Semua interest hidup beserta id user pemiliknya
    pub async fn get_all_with_user<'c, E>(executor: E) -> AppResult<Vec<InterestWithUser>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT rt.users_id AS user_id, {COLUMNS} FROM interest i
             INNER JOIN relation_table rt ON rt.interest_id = i.id
             WHERE rt.deleted_at IS NULL AND i.deleted_at IS NULL
             ORDER BY i.created_at"
        );
        gateway::query_many(executor, sqlx::query_as::<_, InterestWithUser>(&sql)).await
    }

    /// Update interest milik user tanpa perlu tahu id interest-nya
    pub async fn update_by_user_id<'c, E>(executor: E, user_id: Uuid, request: &NewInterest) -> AppResult<Interest>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE interest i SET name = $2, type = $3, updated_at = NOW()
             FROM relation_table rt
             WHERE rt.interest_id = i.id AND rt.users_id = $1
               AND rt.deleted_at IS NULL AND i.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, Interest>(&sql)
                .bind(user_id)
                .bind(request.name.trim())
                .bind(&request.kind),
            ENTITY,
        )
        .await
    }

    /// Soft delete interest milik user, return jumlah row
    pub async fn soft_delete_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<u64>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute(
            executor,
            sqlx::query(
                "UPDATE interest SET deleted_at = NOW()
                 WHERE deleted_at IS NULL
                   AND id IN (SELECT interest_id FROM relation_table WHERE users_id = $1 AND deleted_at IS NULL)",
            )
            .bind(user_id),
        )
        .await
    }
}
