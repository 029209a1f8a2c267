// /restaurant/services/restaurant-service/src/api/extract.rs
// Extractor wrapper supaya rejection axum keluar sebagai envelope 400

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::AppError;

/// JSON body, body rusak -> Validation error
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter, id bukan UUID -> Validation error
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string, parameter hilang atau rusak -> BadRequest
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
