// /restaurant/services/restaurant-service/src/utils/response.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAILED: &str = "failed";

/// Envelope standar untuk semua response API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub status: &'static str,
    pub status_code: u16,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Response sukses 200
    pub fn ok(data: T) -> Self {
        Self::success(StatusCode::OK, data)
    }

    /// Response sukses 201 setelah create
    pub fn created(data: T) -> Self {
        Self::success(StatusCode::CREATED, data)
    }

    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            data: Some(data),
            status: STATUS_SUCCESS,
            status_code: status.as_u16(),
            error: None,
        }
    }

    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            data: None,
            status: STATUS_FAILED,
            status_code: status.as_u16(),
            error: Some(error.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::created(serde_json::json!({"id": 1}))).unwrap();

        assert_eq!(body["status"], "success");
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["data"]["id"], 1);
        assert!(body["error"].is_null());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::<()>::failure(StatusCode::NOT_FOUND, "Food not found")).unwrap();

        assert_eq!(body["status"], "failed");
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["error"], "Food not found");
        assert!(body["data"].is_null());
    }
}
