// /restaurant/services/restaurant-service/src/api/handlers/address.rs

use axum::extract::State;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    db::AddressRepository,
    models::{Address, AddressRequest, DeletedCount, DeletedResource, ListParams},
    services::address_service,
    utils::{ApiResponse, AppResult},
    AppState,
};

/// GET /address
pub async fn list_addresses(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<Address>>> {
    let addresses = AddressRepository::get_all(state.db.pool(), params.include_deleted).await?;
    Ok(ApiResponse::ok(addresses))
}

/// POST /user/{userId}/address
pub async fn create_address(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<AddressRequest>,
) -> AppResult<ApiResponse<Address>> {
    request.validate()?;

    let address = address_service::create_address(&state.db, user_id, request).await?;
    Ok(ApiResponse::created(address))
}

/// GET /user/{userId}/address
pub async fn get_user_address(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<Address>> {
    let address = address_service::get_address_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(address))
}

/// DELETE /user/{userId}/address
pub async fn delete_user_addresses(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedCount>> {
    let affected = address_service::delete_addresses_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(DeletedCount { user_id, affected }))
}

/// GET /user/{userId}/address/{addressId}
pub async fn get_address(
    State(state): State<AppState>,
    ApiPath((_user_id, address_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<Address>> {
    let address = AddressRepository::get_by_id(state.db.pool(), address_id).await?;
    Ok(ApiResponse::ok(address))
}

/// PUT /user/{userId}/address/{addressId}
pub async fn update_address(
    State(state): State<AppState>,
    ApiPath((_user_id, address_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(request): ApiJson<AddressRequest>,
) -> AppResult<ApiResponse<Address>> {
    request.validate()?;

    let address = AddressRepository::update(state.db.pool(), address_id, &request).await?;
    Ok(ApiResponse::ok(address))
}

/// DELETE /user/{userId}/address/{addressId}
pub async fn delete_address(
    State(state): State<AppState>,
    ApiPath((_user_id, address_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<ApiResponse<DeletedResource>> {
    AddressRepository::soft_delete(state.db.pool(), address_id).await?;
    tracing::info!(%address_id, "address deleted");
    Ok(ApiResponse::ok(DeletedResource::new(address_id)))
}
