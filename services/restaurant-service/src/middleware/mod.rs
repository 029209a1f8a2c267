// /restaurant/services/restaurant-service/src/middleware/mod.rs

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser};
