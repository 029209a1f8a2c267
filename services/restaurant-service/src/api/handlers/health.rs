// /restaurant/services/restaurant-service/src/api/handlers/health.rs

use axum::extract::State;
use serde_json::{json, Value};

use crate::{
    utils::{ApiResponse, AppResult},
    AppState,
};

/// Health check endpoint, ikut ping database
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> AppResult<ApiResponse<Value>> {
    state.db.ping().await?;

    Ok(ApiResponse::ok(json!({
        "service": "restaurant-service",
        "status": "healthy",
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}
