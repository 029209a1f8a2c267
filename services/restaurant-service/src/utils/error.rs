// /restaurant/services/restaurant-service/src/utils/error.rs
// Centralized error handling untuk restaurant service

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::response::ApiResponse;

/// Type alias untuk Result dengan AppError
pub type AppResult<T> = Result<T, AppError>;

/// Application error enum dengan semua possible errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("failed to {step}: {source}")]
    Step {
        step: &'static str,
        source: Box<AppError>,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status untuk error ini, step error ikut status error di dalamnya
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Step { source, .. } => source.status_code(),
            AppError::Database(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Pesan yang aman dikirim ke client
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database operation failed".to_string(),
            AppError::Configuration(_) => "Service configuration error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::Step { step, source } => match source.status_code() {
                StatusCode::INTERNAL_SERVER_ERROR => format!("failed to {}", step),
                _ => format!("failed to {}: {}", step, source.public_message()),
            },
            other => other.to_string(),
        }
    }

    /// Error paling dalam dari rantai step
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Step { source, .. } => source.root(),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    /// Convert AppError ke response envelope
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        ApiResponse::<()>::failure(status, self.public_message()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource".to_string()),
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(format!(
                    "duplicate value violates {}",
                    db_err.constraint().unwrap_or("a unique constraint")
                ))
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value ({})", field, e.code),
                })
            })
            .collect();

        // nested struct (user/interest payload) dilaporkan dengan prefix nama field
        for (field, kind) in errors.errors() {
            if let validator::ValidationErrorsKind::Struct(inner) = kind {
                let nested = AppError::from((**inner).clone());
                if let AppError::Validation(msg) = nested {
                    messages.push(format!("{}.{}", field, msg));
                }
            }
        }

        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query parameter: {}", rejection.body_text()))
    }
}

/// Extension untuk menandai step mana di composite operation yang gagal
pub trait StepExt<T> {
    fn step(self, step: &'static str) -> AppResult<T>;
}

impl<T> StepExt<T> for AppResult<T> {
    fn step(self, step: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Step {
            step,
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("Food".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict("x".into()).status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(AppError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Database("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_step_takes_inner_status() {
        let err: AppResult<()> = Err(AppError::NotFound("Table".into()));
        let err = err.step("link the booking to its table").unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "failed to link the booking to its table: Table not found");
        assert!(matches!(err.root(), AppError::NotFound(_)));
    }

    #[test]
    fn test_step_hides_database_details() {
        let err: AppResult<()> = Err(AppError::Database("connection reset by peer".into()));
        let err = err.step("create the interest entry").unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "failed to create the interest entry");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_conversion() {
        let sample = Sample { name: String::new() };
        let err = AppError::from(sample.validate().unwrap_err());

        match err {
            AppError::Validation(msg) => assert_eq!(msg, "name: must not be empty"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
