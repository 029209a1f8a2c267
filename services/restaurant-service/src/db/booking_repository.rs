// /restaurant/services/restaurant-service/src/db/booking_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::models::{Booking, BookingRequest};
use crate::utils::{AppError, AppResult};

const ENTITY: &str = "Booking";
const COLUMNS: &str = "b.id, b.booking_date, b.pre_advance_booking, b.created_at, b.updated_at, b.deleted_at";

pub struct BookingRepository;

impl BookingRepository {
    pub async fn create<'c, E>(executor: E, request: &BookingRequest) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        gateway::execute_returning_id(
            executor,
            sqlx::query_scalar("INSERT INTO booking (booking_date, pre_advance_booking) VALUES ($1, $2) RETURNING id")
                .bind(request.booking_date)
                .bind(request.pre_advance_booking),
        )
        .await
    }

    pub async fn get_by_id<'c, E>(executor: E, id: Uuid) -> AppResult<Booking>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM booking b WHERE b.id = $1 AND b.deleted_at IS NULL");
        gateway::query_one(executor, sqlx::query_as::<_, Booking>(&sql).bind(id), ENTITY).await
    }

    /// Semua booking milik user, urut tanggal booking
    pub async fn get_by_user_id<'c, E>(executor: E, user_id: Uuid) -> AppResult<Vec<Booking>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "SELECT {COLUMNS} FROM booking b
             INNER JOIN user_booking ub ON ub.booking_id = b.id
             WHERE ub.users_id = $1 AND ub.deleted_at IS NULL AND b.deleted_at IS NULL
             ORDER BY b.booking_date"
        );
        gateway::query_many(executor, sqlx::query_as::<_, Booking>(&sql).bind(user_id)).await
    }

    pub async fn get_all<'c, E>(executor: E, include_deleted: bool) -> AppResult<Vec<Booking>>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!("SELECT {COLUMNS} FROM booking b WHERE ($1 OR b.deleted_at IS NULL) ORDER BY b.booking_date");
        gateway::query_many(executor, sqlx::query_as::<_, Booking>(&sql).bind(include_deleted)).await
    }

    pub async fn update<'c, E>(executor: E, id: Uuid, request: &BookingRequest) -> AppResult<Booking>
    where
        E: PgExecutor<'c>,
    {
        let sql = format!(
            "UPDATE booking b SET booking_date = $2, pre_advance_booking = $3, updated_at = NOW()
             WHERE b.id = $1 AND b.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        gateway::query_one(
            executor,
            sqlx::query_as::<_, Booking>(&sql)
                .bind(id)
                .bind(request.booking_date)
                .bind(request.pre_advance_booking),
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
            sqlx::query("UPDATE booking SET deleted_at = COALESCE(deleted_at, NOW()) WHERE id = $1").bind(id),
        )
        .await?;

        if affected == 0 {
            return Err(AppError::NotFound(ENTITY.to_string()));
        }
        Ok(())
    }
}
