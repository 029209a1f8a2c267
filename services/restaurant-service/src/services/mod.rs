// /restaurant/services/restaurant-service/src/services/mod.rs
// Composite operations: beberapa repository call dalam satu transaksi

pub mod address_service;
pub mod billing_service;
pub mod booking_service;
pub mod order_service;
pub mod user_service;

#[cfg(test)]
mod tests;
