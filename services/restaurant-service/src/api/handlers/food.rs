// /restaurant/services/restaurant-service/src/api/handlers/food.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::FoodRepository,
    models::{DeletedResource, Food, FoodRequest, ListParams},
    utils::{ApiResponse, AppResult},
    AppState,
};

/// Tambah menu makanan, tanpa relasi
/// POST /food
pub async fn create_food(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FoodRequest>,
) -> AppResult<ApiResponse<Food>> {
    request.validate()?;

    let food_id = FoodRepository::create(state.db.pool(), &request).await?;
    let food = FoodRepository::get_by_id(state.db.pool(), food_id).await?;

    tracing::info!(%food_id, "food created");
    Ok(ApiResponse::created(food))
}

/// GET /food
pub async fn list_food(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<Food>>> {
    let food = FoodRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(food))
}

/// GET /food/{id}
pub async fn get_food(
    State(state): State<AppState>,
    ApiPath(food_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Food>> {
    let food = FoodRepository::get_by_id(state.db.pool(), food_id).await?;
    Ok(ApiResponse::ok(food))
}

/// PUT /food/{id}
pub async fn update_food(
    State(state): State<AppState>,
    ApiPath(food_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<FoodRequest>,
) -> AppResult<ApiResponse<Food>> {
    request.validate()?;

    let food = FoodRepository::update(state.db.pool(), food_id, &request).await?;
    Ok(ApiResponse::ok(food))
}

/// DELETE /food/{id}
pub async fn delete_food(
    State(state): State<AppState>,
    ApiPath(food_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedResource>> {
    FoodRepository::soft_delete(state.db.pool(), food_id).await?;
    tracing::info!(%food_id, "food deleted");
    Ok(ApiResponse::ok(DeletedResource::new(food_id)))
}

/// GET /food/orderItem/{orderItemId}
pub async fn get_food_by_order_item(
    State(state): State<AppState>,
    ApiPath(order_item_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Food>> {
    let food = FoodRepository::get_by_order_item_id(state.db.pool(), order_item_id).await?;
    Ok(ApiResponse::ok(food))
}
