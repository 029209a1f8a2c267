// /restaurant/services/restaurant-service/src/api/handlers/mod.rs

pub mod address;
pub mod billing;
pub mod booking;
pub mod food;
pub mod health;
pub mod order;
pub mod order_item;
pub mod table;
pub mod user;

// Re-export semua handler functions
pub use address::*;
pub use billing::*;
pub use booking::*;
pub use food::*;
pub use health::*;
pub use order::*;
pub use order_item::*;
pub use table::*;
pub use user::*;
