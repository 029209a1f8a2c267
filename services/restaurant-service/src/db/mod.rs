// /restaurant/services/restaurant-service/src/db/mod.rs

pub mod gateway;
pub mod address_repository;
pub mod billing_repository;
pub mod booking_repository;
pub mod food_repository;
pub mod interest_repository;
pub mod order_item_repository;
pub mod order_repository;
pub mod relation_repository;
pub mod table_repository;
pub mod user_repository;

pub use gateway::{Database, PgTx};
pub use address_repository::AddressRepository;
pub use billing_repository::BillingRepository;
pub use booking_repository::BookingRepository;
pub use food_repository::FoodRepository;
pub use interest_repository::InterestRepository;
pub use order_item_repository::OrderItemRepository;
pub use order_repository::OrderRepository;
pub use relation_repository::{Relation, RelationRepository};
pub use table_repository::TableRepository;
pub use user_repository::UserRepository;
