// /restaurant/services/restaurant-service/src/utils/mod.rs

pub mod config;
pub mod error;
pub mod logger;
pub mod response;
pub mod validator;

pub use config::AppConfig;
pub use error::{AppError, AppResult, StepExt};
pub use logger::init_logger;
pub use response::ApiResponse;
