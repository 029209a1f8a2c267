// /restaurant/services/restaurant-service/src/api/handlers/booking.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::BookingRepository,
    models::{Booking, BookingRequest, DeletedResource, ListParams, TableParam},
    services::booking_service,
    utils::{ApiResponse, AppResult},
    AppState,
};

/// GET /booking
pub async fn list_bookings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<Booking>>> {
    let bookings = BookingRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(bookings))
}

/// GET /booking/{bookingId}
pub async fn get_booking(
    State(state): State<AppState>,
    ApiPath(booking_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Booking>> {
    let booking = BookingRepository::get_by_id(state.db.pool(), booking_id).await?;
    Ok(ApiResponse::ok(booking))
}

/// DELETE /booking/{bookingId}
pub async fn delete_booking(
    State(state): State<AppState>,
    ApiPath(booking_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedResource>> {
    BookingRepository::soft_delete(state.db.pool(), booking_id).await?;
    tracing::info!(%booking_id, "booking deleted");
    Ok(ApiResponse::ok(DeletedResource::new(booking_id)))
}

/// Booking meja untuk user
/// POST /user/{userId}/booking?tableId=
pub async fn create_booking(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<TableParam>,
    ApiJson(request): ApiJson<BookingRequest>,
) -> AppResult<ApiResponse<Booking>> {
    request.validate()?;

    let booking = booking_service::create_booking(&state.db, user_id, params.table_id, request).await?;
    Ok(ApiResponse::created(booking))
}

/// GET /user/{userId}/booking
pub async fn list_user_bookings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Vec<Booking>>> {
    let bookings = booking_service::list_bookings_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(bookings))
}

/// GET /user/{userId}/booking/{bookingId}
pub async fn get_user_booking(
    State(state): State<AppState>,
    ApiPath((_user_id, booking_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<Booking>> {
    let booking = BookingRepository::get_by_id(state.db.pool(), booking_id).await?;
    Ok(ApiResponse::ok(booking))
}

/// PUT /user/{userId}/booking/{bookingId}
pub async fn update_booking(
    State(state): State<AppState>,
    ApiPath((_user_id, booking_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<BookingRequest>,
) -> AppResult<ApiResponse<Booking>> {
    request.validate()?;

    let booking = BookingRepository::update(state.db.pool(), booking_id, &request).await?;
    Ok(ApiResponse::ok(booking))
}
