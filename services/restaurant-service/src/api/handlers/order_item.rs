// /restaurant/services/restaurant-service/src/api/handlers/order_item.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::OrderItemRepository,
    models::{DeletedResource, ListParams, OrderItem, OrderItemParams, OrderItemRequest},
    services::order_service,
    utils::{ApiResponse, AppResult},
    AppState,
};

/// Item baru untuk order, terhubung ke satu menu makanan
/// POST /orderItem?orderId=&foodId=
pub async fn create_order_item(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<OrderItemParams>,
    ApiJson(request): ApiJson<OrderItemRequest>,
) -> AppResult<ApiResponse<OrderItem>> {
    request.validate()?;

    let item = order_service::create_order_item(&state.db, params.order_id, params.food_id, request).await?;
    Ok(ApiResponse::created(item))
}

/// GET /orderItem
pub async fn list_order_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<OrderItem>>> {
    let items = OrderItemRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(items))
}

/// GET /orderItem/{id}
pub async fn get_order_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<OrderItem>> {
    let item = OrderItemRepository::get_by_id(state.db.pool(), item_id).await?;
    Ok(ApiResponse::ok(item))
}

/// PUT /orderItem/{id}
pub async fn update_order_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<OrderItemRequest>,
) -> AppResult<ApiResponse<OrderItem>> {
    request.validate()?;

    let item = OrderItemRepository::update(state.db.pool(), item_id, &request).await?;
    Ok(ApiResponse::ok(item))
}

/// DELETE /orderItem/{id}
pub async fn delete_order_item(
    State(state): State<AppState>,
    ApiPath(item_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedResource>> {
    OrderItemRepository::soft_delete(state.db.pool(), item_id).await?;
    tracing::info!(%item_id, "order item deleted");
    Ok(ApiResponse::ok(DeletedResource::new(item_id)))
}

/// GET /orderItem/order/{orderId}
pub async fn list_items_by_order(
    State(state): State<AppState>,
    ApiPath(order_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Vec<OrderItem>>> {
    let items = order_service::list_items_for_order(&state.db, order_id).await?;
    Ok(ApiResponse::ok(items))
}
