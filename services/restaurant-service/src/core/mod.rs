// /restaurant/services/restaurant-service/src/core/mod.rs

pub mod jwt;
pub mod security;

pub use jwt::{JwtService, TokenError};
pub use security::SecurityService;
