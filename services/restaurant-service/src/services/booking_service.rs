// /restaurant/services/restaurant-service/src/services/booking_service.rs

use uuid::Uuid;

use crate::{
    db::{gateway, BookingRepository, Database, PgTx, Relation, RelationRepository, UserRepository},
    models::{Booking, BookingRequest},
    utils::{AppResult, StepExt},
};

/// Booking -> relasi user/booking -> relasi booking/table
pub async fn create_booking(
    db: &Database,
    user_id: Uuid,
    table_id: Uuid,
    request: BookingRequest,
) -> AppResult<Booking> {
    let booking = db
        .run_in_transaction("create_booking", move |tx| {
            Box::pin(insert_booking_for_table(tx, user_id, table_id, request))
        })
        .await?;

    tracing::info!(%user_id, %table_id, booking_id = %booking.id, "booking created");
    Ok(booking)
}

async fn insert_booking_for_table(
    tx: &mut PgTx,
    user_id: Uuid,
    table_id: Uuid,
    request: BookingRequest,
) -> AppResult<Booking> {
    gateway::ensure_live(&mut **tx, "users", user_id, "User")
        .await
        .step("verify the user")?;
    gateway::ensure_live(&mut **tx, "res_table", table_id, "Table")
        .await
        .step("verify the table")?;

    let booking_id = BookingRepository::create(&mut **tx, &request)
        .await
        .step("create the booking entry")?;

    RelationRepository::link(&mut **tx, Relation::UserBooking, user_id, booking_id)
        .await
        .step("link the booking to the user")?;

    RelationRepository::link(&mut **tx, Relation::BookingTable, booking_id, table_id)
        .await
        .step("link the booking to the table")?;

    BookingRepository::get_by_id(&mut **tx, booking_id).await
}

/// Semua booking milik user, list kosong kalau belum ada
pub async fn list_bookings_for_user(db: &Database, user_id: Uuid) -> AppResult<Vec<Booking>> {
    UserRepository::get_by_id(db.pool(), user_id).await?;
    BookingRepository::get_by_user_id(db.pool(), user_id).await
}
