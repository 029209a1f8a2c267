// /restaurant/services/restaurant-service/src/api/handlers/user.rs

use axum::{extract::State, Extension};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::extract::{ApiJson, ApiPath, ApiQuery},
    middleware::AuthenticatedUser,
    models::{CreateUserRequest, DeletedResource, ListParams, LoginRequest, LoginResponse, UpdateUserRequest, UserWithInterest},
    services::user_service,
    utils::{ApiResponse, AppResult},
    AppState,
};

/// Handler untuk signup user baru beserta interest-nya
/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> AppResult<ApiResponse<UserWithInterest>> {
    request.validate()?;

    let created = user_service::create_user(&state.db, &state.security, request).await?;
    Ok(ApiResponse::created(created))
}

/// GET /user
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<Vec<UserWithInterest>>> {
    let users = user_service::list_users(&state.db, params.include_deleted).await?;
    Ok(ApiResponse::ok(users))
}

/// Handler untuk login, return bearer token
/// POST /user/login
pub async fn login_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    request.validate()?;

    let response = user_service::login(&state.db, &state.security, &state.jwt_service, request).await?;
    Ok(ApiResponse::ok(response))
}

/// GET /user/{userId}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<UserWithInterest>> {
    let user = user_service::get_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(user))
}

/// Partial update user (dan interest kalau dikirim)
/// PUT /user/{userId}
pub async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> AppResult<ApiResponse<UserWithInterest>> {
    request.validate()?;

    let updated = user_service::update_user(&state.db, &state.security, user_id, request).await?;
    tracing::info!(%user_id, actor = %auth.user_id, "user updated");
    Ok(ApiResponse::ok(updated))
}

/// DELETE /user/{userId}
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<ApiResponse<DeletedResource>> {
    user_service::delete_user(&state.db, user_id).await?;
    tracing::info!(%user_id, actor = %auth.user_id, "user deleted by request");
    Ok(ApiResponse::ok(DeletedResource::new(user_id)))
}
