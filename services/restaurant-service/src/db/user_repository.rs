// /restaurant/services/restaurant-service/src/db/user_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{NewUser, User, UserUpdate};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "User";
const COLUMNS: &str = "u.id, u.first_name, u.middle_name, u.last_name, u.phone, u.email, u.password_hash, \
                       u.created_at, u.updated_at, u.deleted_at";

/// Repository untuk operasi database terkait user.
/// Password sudah harus di-hash sebelum masuk ke sini.
pub struct UserRepository;

impl UserRepository {
    /// Membuat user baru, email disimpan lowercase
    pub async fn create<'c, E>(executor: E, user: &NewUser, password_hash: &str) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar(
                "INSERT INTO users (first_name, middle_name, last_name, phone, email, password_hash)
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
            )
            .bind(user.first_name.trim())
            .bind(user.middle_name.as_deref().map(str::trim))
            .bind(user.last_name.trim())
            .bind(user.phone.trim())
            .bind(normalize_email(&user.email))
            .bind(password_hash),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<User>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM users u WHERE u.id = $1 AND u.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, User>(&sql).bind(id), ENTITY).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<User>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM users u WHERE ($1 OR u.deleted_at IS NULL) ORDER BY u.created_at");
        gateway::query_many(executor, sqlx::query_as::<_, User>(&sql).bind(include_deleted)).await
    }

    /// Cari user hidup berdasarkan email (case-insensitive)
    pub async fn find_by_email<'c, E>(executor: E, email: &str) -> AppResult<User>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM users u WHERE LOWER(u.email) = $1 AND u.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, User>(&sql).bind(normalize_email(email)), ENTITY).await
    }

    pub async fn exists_by_email<'c, E>(executor: E, email: &str) -> AppResult<bool>
    where
        E: PgExecutor<'c>,
    {
        let exists = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(email) = $1 AND deleted_at IS NULL)",
        )
        .bind(normalize_email(email))
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    pub async fn exists_by_phone<'c, E>(executor: E, phone: &str) -> AppResult<bool>
    where
        E: PgExecutor<'c>,
    {
        let exists = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE phone = $1 AND deleted_at IS NULL)")
            .bind(phone.trim())
            .fetch_one(executor)
            .await?;
        Ok(exists)
    }

    /// Partial update pakai update mask, field None tetap nilai lama
    pub async fn update<'c, E>(
        executor: E,
        id: Uuid,
        update: &UserUpdate,
        password_hash: Option<&str>,
    ) -> AppResult<User>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE users u SET
                first_name = COALESCE($2, u.first_name),
                middle_name = COALESCE($3, u.middle_name),
                last_name = COALESCE($4, u.last_name),
                phone = COALESCE($5, u.phone),
                email = COALESCE($6, u.email),
                password_hash = COALESCE($7, u.password_hash),
                updated_at = NOW()
             WHERE u.id = $1 AND u.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, User>(&sql)
                .bind(id)
                .bind(update.first_name.as_deref().map(str::trim))
                .bind(update.middle_name.as_deref().map(str::trim))
                .bind(update.last_name.as_deref().map(str::trim))
                .bind(update.phone.as_deref().map(str::trim))
                .bind(update.email.as_deref().map(normalize_email))
                .bind(password_hash),
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
            sqlx::query("UPDATE users SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
