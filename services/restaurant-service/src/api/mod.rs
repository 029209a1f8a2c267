// /restaurant/services/restaurant-service/src/api/mod.rs

pub mod extract;
pub mod handlers;
pub mod routes;

pub use routes::create_routes;

#[cfg(test)]
mod tests;
