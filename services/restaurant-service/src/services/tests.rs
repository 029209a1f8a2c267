// /restaurant/services/restaurant-service/src/services/tests.rs
// Butuh Postgres: DATABASE_URL=... cargo test -- --ignored

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{address_service, billing_service, booking_service, order_service, user_service};
use crate::{
    core::{JwtService, SecurityService},
    db::{Database, FoodRepository, TableRepository, UserRepository},
    models::{
        AddressRequest, BillingRequest, BookingRequest, CreateUserRequest, FoodRequest, LoginRequest, NewInterest, NewUser,
        OrderItemRequest, OrderRequest, TableRequest, TableUpdate, UpdateUserRequest, UserUpdate,
    },
    utils::AppError,
};

const SECRET: &str = "an-adequately-long-test-secret-value-0123";

fn signup(phone: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        user: NewUser {
            first_name: "Asha".to_string(),
            middle_name: None,
            last_name: "Rao".to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            password: "correct-horse".to_string(),
        },
        interest: NewInterest {
            name: "x".to_string(),
            kind: "y".to_string(),
        },
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_signup_creates_user_interest_and_relation(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");

    let created = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap();

    let interest = created.interest.expect("interest");
    assert_eq!(interest.name, "x");
    assert_eq!(count(&pool, "relation_table").await, 1);

    let duplicate = user_service::create_user(&db, &security, signup("555", "other@b.com")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_signup_rolls_back_when_interest_insert_fails(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");

    // interest.name dibatasi VARCHAR(100), insert kedua pasti gagal
    let mut request = signup("555", "a@b.com");
    request.interest.name = "n".repeat(300);

    let err = user_service::create_user(&db, &security, request).await.unwrap_err();

    assert!(matches!(err, AppError::Step { step: "create the interest entry", .. }));
    assert_eq!(count(&pool, "users").await, 0);
    assert_eq!(count(&pool, "interest").await, 0);
    assert_eq!(count(&pool, "relation_table").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_partial_user_update_keeps_omitted_fields(pool: PgPool) {
    let db = Database::new(pool);
    let security = SecurityService::new(b"pepper");
    let created = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap();

    let request = UpdateUserRequest {
        user: UserUpdate {
            last_name: Some("Iyer".to_string()),
            ..Default::default()
        },
        interest: Some(NewInterest {
            name: "jazz".to_string(),
            kind: "music".to_string(),
        }),
    };
    let updated = user_service::update_user(&db, &security, created.user.id, request).await.unwrap();

    assert_eq!(updated.user.last_name, "Iyer");
    assert_eq!(updated.user.first_name, "Asha");
    assert_eq!(updated.user.phone, "555");
    assert!(updated.user.updated_at.is_some());
    assert_eq!(updated.interest.unwrap().name, "jazz");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_login_subject_and_wrong_password(pool: PgPool) {
    let db = Database::new(pool);
    let security = SecurityService::new(b"pepper");
    let jwt = JwtService::with_secret(SECRET, "restaurant-service", 24);
    let created = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap();

    let login = LoginRequest {
        email: "A@b.com".to_string(),
        password: "correct-horse".to_string(),
    };
    let response = user_service::login(&db, &security, &jwt, login).await.unwrap();
    let claims = jwt.verify_token(&response.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), created.user.id);

    let wrong = LoginRequest {
        email: "a@b.com".to_string(),
        password: "wrong-horse".to_string(),
    };
    let err = user_service::login(&db, &security, &jwt, wrong).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_booking_lifecycle(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");
    let user = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap().user;
    let table_id = TableRepository::create(&pool, &TableRequest { code: 1, capacity: 4 }).await.unwrap();

    let date = Utc.with_ymd_and_hms(2030, 5, 1, 19, 30, 0).unwrap();
    let booking = booking_service::create_booking(
        &db,
        user.id,
        table_id,
        BookingRequest {
            booking_date: date,
            pre_advance_booking: true,
        },
    )
    .await
    .unwrap();

    let listed = booking_service::list_bookings_for_user(&db, user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].booking_date, date);

    let table = TableRepository::get_by_booking_id(&pool, booking.id).await.unwrap();
    assert_eq!(table.id, table_id);

    crate::db::BookingRepository::soft_delete(&pool, booking.id).await.unwrap();
    assert!(booking_service::list_bookings_for_user(&db, user.id).await.unwrap().is_empty());
    assert!(matches!(
        crate::db::BookingRepository::get_by_id(&pool, booking.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_booking_for_deleted_table_is_rejected(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");
    let user = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap().user;
    let table_id = TableRepository::create(&pool, &TableRequest { code: 2, capacity: 2 }).await.unwrap();
    TableRepository::soft_delete(&pool, table_id).await.unwrap();

    let err = booking_service::create_booking(
        &db,
        user.id,
        table_id,
        BookingRequest {
            booking_date: Utc::now(),
            pre_advance_booking: false,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err.root(), AppError::NotFound(_)));
    assert_eq!(count(&pool, "booking").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let food_id = FoodRepository::create(
        &pool,
        &FoodRequest {
            name: "Dosa".to_string(),
            price: 120,
            kind: "veg".to_string(),
        },
    )
    .await
    .unwrap();

    FoodRepository::soft_delete(&pool, food_id).await.unwrap();
    let first: chrono::DateTime<Utc> = sqlx::query_scalar("SELECT deleted_at FROM food WHERE id = $1")
        .bind(food_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    FoodRepository::soft_delete(&pool, food_id).await.unwrap();
    let second: chrono::DateTime<Utc> = sqlx::query_scalar("SELECT deleted_at FROM food WHERE id = $1")
        .bind(food_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(FoodRepository::get_all(&pool, false).await.unwrap().is_empty());
    assert_eq!(FoodRepository::get_all(&pool, true).await.unwrap().len(), 1);
    assert!(matches!(
        FoodRepository::soft_delete(&pool, Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_partial_table_update(pool: PgPool) {
    let table_id = TableRepository::create(&pool, &TableRequest { code: 7, capacity: 6 }).await.unwrap();

    let updated = TableRepository::update(&pool, table_id, &TableUpdate { code: Some(8), capacity: None })
        .await
        .unwrap();

    assert_eq!(updated.code, 8);
    assert_eq!(updated.capacity, 6);
    assert!(matches!(
        TableRepository::update(&pool, Uuid::new_v4(), &TableUpdate::default()).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_order_with_items_and_address(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");
    let user = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap().user;

    let order = order_service::create_order(
        &db,
        user.id,
        OrderRequest {
            item_discount: 0,
            tax: 18,
            shipping: "pickup".to_string(),
            total: 240,
        },
    )
    .await
    .unwrap();
    let food_id = FoodRepository::create(
        &pool,
        &FoodRequest {
            name: "Idli".to_string(),
            price: 60,
            kind: "veg".to_string(),
        },
    )
    .await
    .unwrap();

    let item = order_service::create_order_item(&db, order.id, food_id, OrderItemRequest { price: 60, quantity: 2 })
        .await
        .unwrap();

    let items = order_service::list_items_for_order(&db, order.id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(FoodRepository::get_by_order_item_id(&pool, item.id).await.unwrap().id, food_id);
    assert_eq!(order_service::list_orders_for_user(&db, user.id).await.unwrap().len(), 1);

    let address = AddressRequest {
        line1: "12 MG Road".to_string(),
        line2: String::new(),
        pin_code: "560001".to_string(),
        city: "Bengaluru".to_string(),
        state: "KA".to_string(),
        country: "IN".to_string(),
    };
    address_service::create_address(&db, user.id, address).await.unwrap();
    assert_eq!(address_service::delete_addresses_for_user(&db, user.id).await.unwrap(), 1);

    user_service::delete_user(&db, user.id).await.unwrap();
    assert!(matches!(UserRepository::get_by_id(&pool, user.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        order_service::list_orders_for_user(&db, user.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_interest_replaced_through_user_update_and_retired_with_user(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");
    let created = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap();
    let interest_id = created.interest.unwrap().id;

    let request = UpdateUserRequest {
        user: UserUpdate::default(),
        interest: Some(NewInterest {
            name: "chess".to_string(),
            kind: "game".to_string(),
        }),
    };
    let updated = user_service::update_user(&db, &security, created.user.id, request).await.unwrap();
    let interest = updated.interest.unwrap();
    assert_eq!(interest.id, interest_id);
    assert_eq!(interest.kind, "game");

    let listed = user_service::list_users(&db, false).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].interest.as_ref().unwrap().name, "chess");

    user_service::delete_user(&db, created.user.id).await.unwrap();
    user_service::delete_user(&db, created.user.id).await.unwrap();

    assert!(user_service::list_users(&db, false).await.unwrap().is_empty());
    let history = user_service::list_users(&db, true).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].interest.is_none());
    assert_eq!(count(&pool, "interest").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_billing_linked_to_user_and_order(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");
    let user = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap().user;
    let order = order_service::create_order(
        &db,
        user.id,
        OrderRequest {
            item_discount: 0,
            tax: 5,
            shipping: "delivery".to_string(),
            total: 500,
        },
    )
    .await
    .unwrap();
    let card = || BillingRequest {
        kind: 1,
        mode: "card".to_string(),
    };

    let billing = billing_service::create_billing(&db, user.id, order.id, card()).await.unwrap();
    assert_eq!(count(&pool, "user_billing").await, 1);
    assert_eq!(count(&pool, "order_billing").await, 1);

    let by_user = billing_service::get_billing_for_user(&db, user.id, None).await.unwrap();
    let by_order = billing_service::get_billing_for_user(&db, user.id, Some(order.id)).await.unwrap();
    assert_eq!(by_user.id, billing.id);
    assert_eq!(by_order.id, billing.id);
    assert_eq!(by_order.mode, "card");

    // order tidak dikenal: seluruh transaksi batal, tidak ada baris billing baru
    let err = billing_service::create_billing(&db, user.id, Uuid::new_v4(), card()).await.unwrap_err();
    assert!(matches!(err.root(), AppError::NotFound(_)));
    assert_eq!(count(&pool, "billing").await, 1);
    assert_eq!(count(&pool, "user_billing").await, 1);

    assert_eq!(billing_service::delete_billings_for_user(&db, user.id).await.unwrap(), 1);
    assert_eq!(billing_service::delete_billings_for_user(&db, user.id).await.unwrap(), 0);
    assert!(matches!(
        billing_service::get_billing_for_user(&db, user.id, None).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_address_of_user(pool: PgPool) {
    let db = Database::new(pool.clone());
    let security = SecurityService::new(b"pepper");
    let user = user_service::create_user(&db, &security, signup("555", "a@b.com")).await.unwrap().user;

    assert!(matches!(
        address_service::get_address_for_user(&db, user.id).await,
        Err(AppError::NotFound(_))
    ));

    let created = address_service::create_address(
        &db,
        user.id,
        AddressRequest {
            line1: "12 MG Road".to_string(),
            line2: String::new(),
            pin_code: "560001".to_string(),
            city: "Bengaluru".to_string(),
            state: "KA".to_string(),
            country: "IN".to_string(),
        },
    )
    .await
    .unwrap();

    let found = address_service::get_address_for_user(&db, user.id).await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.city, "Bengaluru");

    assert!(matches!(
        address_service::get_address_for_user(&db, Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
}
