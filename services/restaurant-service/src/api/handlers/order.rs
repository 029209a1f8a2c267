// /restaurant/services/restaurant-service/src/api/handlers/order.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::OrderRepository,
    models::{DeletedResource, ListParams, Order, OrderRequest},
    services::order_service,
    utils::{ApiResponse, AppResult},
    AppState,
};

/// GET /order
pub async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let orders = OrderRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(orders))
}

/// POST /user/{userId}/order
pub async fn create_order(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<OrderRequest>,
) -> AppResult<ApiResponse<Order>> {
    request.validate()?;

    let order = order_service::create_order(&state.db, user_id, request).await?;
    Ok(ApiResponse::created(order))
}

/// GET /user/{userId}/order
pub async fn list_user_orders(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Vec<Order>>> {
    let orders = order_service::list_orders_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(orders))
}

/// GET /user/{userId}/order/{orderId}
pub async fn get_order(
    State(state): State<AppState>,
    ApiPath((_user_id, order_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<Order>> {
    let order = OrderRepository::get_by_id(state.db.pool(), order_id).await?;
    Ok(ApiResponse::ok(order))
}

/// PUT /user/{userId}/order/{orderId}
pub async fn update_order(
    State(state): State<AppState>,
    ApiPath((_user_id, order_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<OrderRequest>,
) -> AppResult<ApiResponse<Order>> {
    request.validate()?;

    let order = OrderRepository::update(state.db.pool(), order_id, &request).await?;
    Ok(ApiResponse::ok(order))
}

/// DELETE /user/{userId}/order/{orderId}
pub async fn delete_order(
    State(state): State<AppState>,
    ApiPath((_user_id, order_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<DeletedResource>> {
    OrderRepository::soft_delete(state.db.pool(), order_id).await?;
    tracing::info!(%order_id, "order deleted");
    Ok(ApiResponse::ok(DeletedResource::new(order_id)))
}
