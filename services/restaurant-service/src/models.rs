// /restaurant/services/restaurant-service/src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validator::{validate_not_blank, validate_phone, validate_pin_code};

// ===== USER ENTITIES =====

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Interest beserta id user pemiliknya
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestWithUser {
    pub user_id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub interest: Interest,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithInterest {
    pub user: User,
    pub interest: Option<Interest>,
}

// ===== ADDRESS & BILLING =====

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Uuid,
    pub line1: String,
    pub line2: String,
    pub pin_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: i32,
    pub mode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// ===== BOOKING & TABLE =====

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub booking_date: DateTime<Utc>,
    pub pre_advance_booking: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantTable {
    pub id: Uuid,
    pub code: i32,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// ===== ORDER, ORDER ITEM & FOOD =====

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub item_discount: i32,
    pub tax: i32,
    pub shipping: String,
    pub total: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub price: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub price: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// ===== REQUEST MODELS =====

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub last_name: String,

    #[validate(custom(function = "validate_phone", message = "is not a valid phone number"))]
    pub phone: String,

    #[validate(email(message = "is not a valid email address"))]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInterest {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub kind: String,
}

/// Signup payload: user dan interest dibuat dalam satu transaksi
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(nested)]
    pub user: NewUser,
    #[validate(nested)]
    pub interest: NewInterest,
}

/// Update mask untuk user: field `None` tidak diubah
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_phone", message = "is not a valid phone number"))]
    pub phone: Option<String>,

    #[validate(email(message = "is not a valid email address"))]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.middle_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(nested)]
    pub user: UserUpdate,
    #[validate(nested)]
    pub interest: Option<NewInterest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "is not a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub line1: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub line2: String,

    #[validate(custom(function = "validate_pin_code", message = "is not a valid pin code"))]
    pub pin_code: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub city: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub state: String,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillingRequest {
    #[serde(rename = "type")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub kind: i32,

    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub booking_date: DateTime<Utc>,
    #[serde(default)]
    pub pre_advance_booking: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TableRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub code: i32,

    #[validate(range(min = 1, max = 100, message = "must be 1-100"))]
    pub capacity: i32,
}

/// Update mask untuk table: field `None` tidak diubah
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    #[validate(range(min = 1, message = "must be positive"))]
    pub code: Option<i32>,

    #[validate(range(min = 1, max = 100, message = "must be 1-100"))]
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub item_discount: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub tax: i32,

    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub shipping: String,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub total: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i32,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "must not be blank"))]
    pub name: String,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i32,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub kind: String,
}

// ===== QUERY PARAMETERS =====

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParam {
    pub order_id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalOrderParam {
    pub order_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableParam {
    pub table_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemParams {
    pub order_id: Uuid,
    pub food_id: Uuid,
}

// ===== RESPONSE MODELS =====

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResource {
    pub id: Uuid,
    pub deleted: bool,
}

impl DeletedResource {
    pub fn new(id: Uuid) -> Self {
        Self { id, deleted: true }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCount {
    pub user_id: Uuid,
    pub affected: u64,
}
