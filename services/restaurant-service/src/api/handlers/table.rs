// /restaurant/services/restaurant-service/src/api/handlers/table.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::TableRepository,
    models::{DeletedResource, ListParams, RestaurantTable, TableRequest, TableUpdate},
    utils::{ApiResponse, AppResult},
    AppState,
};

/// Tambah meja, tanpa relasi
/// POST /table
pub async fn create_table(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TableRequest>,
) -> AppResult<ApiResponse<RestaurantTable>> {
    request.validate()?;

    let table_id = TableRepository::create(state.db.pool(), &request).await?;
    let table = TableRepository::get_by_id(state.db.pool(), table_id).await?;

    tracing::info!(%table_id, code = table.code, "table created");
    Ok(ApiResponse::created(table))
}

/// GET /table
pub async fn list_tables(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<RestaurantTable>>> {
    let tables = TableRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(tables))
}

/// GET /table/{id}
pub async fn get_table(
    State(state): State<AppState>,
    ApiPath(table_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<RestaurantTable>> {
    let table = TableRepository::get_by_id(state.db.pool(), table_id).await?;
    Ok(ApiResponse::ok(table))
}

/// Partial update, field yang tidak dikirim tetap
/// PUT /table/{id}
pub async fn update_table(
    State(state): State<AppState>,
    ApiPath(table_id): ApiPath<Uuid>,
    ApiJson(update): ApiJson<TableUpdate>,
) -> AppResult<ApiResponse<RestaurantTable>> {
    update.validate()?;

    let table = TableRepository::update(state.db.pool(), table_id, &update).await?;
    Ok(ApiResponse::ok(table))
}

/// DELETE /table/{id}
pub async fn delete_table(
    State(state): State<AppState>,
    ApiPath(table_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedResource>> {
    TableRepository::soft_delete(state.db.pool(), table_id).await?;
    tracing::info!(%table_id, "table deleted");
    Ok(ApiResponse::ok(DeletedResource::new(table_id)))
}

/// GET /table/booking/{bookingId}
pub async fn get_table_by_booking(
    State(state): State<AppState>,
    ApiPath(booking_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<RestaurantTable>> {
    let table = TableRepository::get_by_booking_id(state.db.pool(), booking_id).await?;
    Ok(ApiResponse::ok(table))
}
