// /restaurant/services/restaurant-service/src/middleware/auth.rs

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    core::TokenError,
    utils::{AppError, AppResult},
    AppState,
};

/// User yang sudah terautentikasi, di-inject ke request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Middleware untuk validasi JWT token pada protected endpoints
pub async fn auth_middleware(State(state): State<AppState>, mut req: Request, next: Next) -> AppResult<Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.jwt_service.verify_token(token).map_err(|e| {
        tracing::warn!("JWT verification failed on {}: {}", req.uri().path(), e);
        token_error_to_app_error(e)
    })?;

    let user_id = claims.user_id().map_err(token_error_to_app_error)?;

    tracing::debug!(%user_id, path = %req.uri().path(), "authenticated request");
    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Token rusak -> 400, signature salah atau expired -> 401
fn token_error_to_app_error(err: TokenError) -> AppError {
    match err {
        TokenError::Malformed => AppError::BadRequest("malformed bearer token".to_string()),
        TokenError::Expired => AppError::Unauthorized("token has expired".to_string()),
        TokenError::Invalid => AppError::Unauthorized("invalid token".to_string()),
    }
}

/// Helper untuk extract bearer token dari request header
fn extract_bearer_token(req: &Request) -> AppResult<&str> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("Authorization header not found");
            AppError::Unauthorized("missing authorization header".to_string())
        })?
        .to_str()
        .map_err(|_| AppError::Unauthorized("invalid authorization header encoding".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::debug!("Authorization header missing Bearer prefix");
            AppError::Unauthorized("authorization header must start with 'Bearer '".to_string())
        })
}
