// /restaurant/services/restaurant-service/src/db/gateway.rs

use std::{future::Future, pin::Pin};

use sqlx::{
    postgres::{PgArguments, PgRow},
    query::{Query, QueryAs, QueryScalar},
    FromRow, PgExecutor, PgPool, Postgres, Transaction,
};
use uuid::Uuid;

use crate::utils::{AppError, AppResult};

/// Transaksi Postgres yang memegang satu koneksi dari pool
pub type PgTx = Transaction<'static, Postgres>;

/// Future yang dikembalikan closure di dalam `run_in_transaction`
pub type TxFuture<'c, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'c>>;

/// Handle database yang di-share lewat AppState
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Jalankan `operation` di dalam satu transaksi.
    /// Commit kalau Ok, rollback kalau Err dan error dikembalikan apa adanya.
    pub async fn run_in_transaction<T, F>(&self, name: &'static str, operation: F) -> AppResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgTx) -> TxFuture<'c, T> + Send,
    {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("{}: failed to begin transaction: {}", name, e)))?;

        match operation(&mut tx).await {
            Ok(value) => {
                tx.commit()
                    .await
                    .map_err(|e| AppError::Database(format!("{}: commit failed: {}", name, e)))?;
                tracing::debug!(operation = name, "transaction committed");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(operation = name, error = %err, "transaction rolled back");
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(operation = name, "rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Ping database, dipakai health check
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Jalankan UPDATE/INSERT/DELETE dan kembalikan jumlah row yang kena
pub async fn execute<'q, 'c, E>(executor: E, query: Query<'q, Postgres, PgArguments>) -> AppResult<u64>
where
    E: PgExecutor<'c>,
{
    let result = query.execute(executor).await?;
    Ok(result.rows_affected())
}

/// Jalankan `INSERT ... RETURNING id`
pub async fn execute_returning_id<'q, 'c, E>(
    executor: E,
    query: QueryScalar<'q, Postgres, Uuid, PgArguments>,
) -> AppResult<Uuid>
where
    E: PgExecutor<'c>,
{
    let id = query.fetch_one(executor).await?;
    Ok(id)
}

/// Ambil tepat satu row, NotFound(entity) kalau kosong
pub async fn query_one<'q, 'c, E, T>(
    executor: E,
    query: QueryAs<'q, Postgres, T, PgArguments>,
    entity: &str,
) -> AppResult<T>
where
    E: PgExecutor<'c>,
    T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
{
    query
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| AppError::NotFound(entity.to_string()))
}

/// Ambil nol atau lebih row
pub async fn query_many<'q, 'c, E, T>(executor: E, query: QueryAs<'q, Postgres, T, PgArguments>) -> AppResult<Vec<T>>
where
    E: PgExecutor<'c>,
    T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
{
    let rows = query.fetch_all(executor).await?;
    Ok(rows)
}

/// Pastikan row dengan id tersebut masih hidup (belum di-soft-delete)
pub async fn ensure_live<'c, E>(executor: E, table: &'static str, id: Uuid, entity: &str) -> AppResult<()>
where
    E: PgExecutor<'c>,
{
    let sql = format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND deleted_at IS NULL)",
        table
    );
    let exists: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(executor).await?;

    if exists {
        Ok(())
    } else {
        Err(AppError::NotFound(entity.to_string()))
    }
}
