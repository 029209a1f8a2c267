// /restaurant/services/restaurant-service/src/api/handlers/billing.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::BillingRepository,
    models::{Billing, BillingRequest, DeletedCount, DeletedResource, ListParams, OptionalOrderParam, OrderParam},
    services::billing_service,
    utils::{ApiResponse, AppResult},
    AppState,
};

/// GET /billing
pub async fn list_billings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<Billing>>> {
    let billings = BillingRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(billings))
}

/// Billing untuk order milik user
/// POST /user/{userId}/billing?orderId=
pub async fn create_billing(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<OrderParam>,
    ApiJson(request): ApiJson<BillingRequest>,
) -> AppResult<ApiResponse<Billing>> {
    request.validate()?;

    let billing = billing_service::create_billing(&state.db, user_id, params.order_id, request).await?;
    Ok(ApiResponse::created(billing))
}

/// GET /user/{userId}/billing[?orderId=]
pub async fn get_user_billing(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<OptionalOrderParam>,
) -> AppResult<ApiResponse<Billing>> {
    let billing = billing_service::get_billing_for_user(&state.db, user_id, params.order_id).await?;
    Ok(ApiResponse::ok(billing))
}

/// DELETE /user/{userId}/billing
pub async fn delete_user_billings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedCount>> {
    let affected = billing_service::delete_billings_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(DeletedCount { user_id, affected }))
}

/// GET /user/{userId}/billing/{billingId}
pub async fn get_billing(
    State(state): State<AppState>,
    ApiPath((_user_id, billing_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<Billing>> {
    let billing = BillingRepository::get_by_id(state.db.pool(), billing_id).await?;
    Ok(ApiResponse::ok(billing))
}

/// PUT /user/{userId}/billing/{billingId}
pub async fn update_billing(
    State(state): State<AppState>,
    ApiPath((_user_id, billing_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<BillingRequest>,
) -> AppResult<ApiResponse<Billing>> {
    request.validate()?;

    let billing = BillingRepository::update(state.db.pool(), billing_id, &request).await?;
    Ok(ApiResponse::ok(billing))
}

/// DELETE /user/{userId}/billing/{billingId}
pub async fn delete_billing(
    State(state): State<AppState>,
    ApiPath((_user_id, billing_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<DeletedResource>> {
    BillingRepository::soft_delete(state.db.pool(), billing_id).await?;
    tracing::info!(%billing_id, "billing deleted");
    Ok(ApiResponse::ok(DeletedResource::new(billing_id)))
}
