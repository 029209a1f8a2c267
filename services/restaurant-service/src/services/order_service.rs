// /restaurant/services/restaurant-service/src/services/order_service.rs

use uuid::Uuid;

use crate::{
    db::{gateway, Database, OrderItemRepository, OrderRepository, PgTx, Relation, RelationRepository, UserRepository},
    models::{Order, OrderItem, OrderItemRequest, OrderRequest},
    utils::{AppResult, StepExt},
};

// ===== ORDER =====

/// Order -> relasi user/order
pub async fn create_order(db: &Database, user_id: Uuid, request: OrderRequest) -> AppResult<Order> {
    let order = db
        .run_in_transaction("create_order", move |tx| Box::pin(insert_order_for_user(tx, user_id, request)))
        .await?;

    tracing::info!(%user_id, order_id = %order.id, "order created");
    Ok(order)
}

async fn insert_order_for_user(tx: &mut PgTx, user_id: Uuid, request: OrderRequest) -> AppResult<Order> {
    gateway::ensure_live(&mut **tx, "users", user_id, "User")
        .await
        .step("verify the user")?;

    let order_id = OrderRepository::create(&mut **tx, &request)
        .await
        .step("create the order entry")?;

    RelationRepository::link(&mut **tx, Relation::UserOrder, user_id, order_id)
        .await
        .step("link the order to the user")?;

    OrderRepository::get_by_id(&mut **tx, order_id).await
}

/// Semua order milik user, list kosong kalau belum ada
pub async fn list_orders_for_user(db: &Database, user_id: Uuid) -> AppResult<Vec<Order>> {
    UserRepository::get_by_id(db.pool(), user_id).await?;
    OrderRepository::get_by_user_id(db.pool(), user_id).await
}

// ===== ORDER ITEM =====

/// Order item -> relasi order/item -> relasi item/food
pub async fn create_order_item(
    db: &Database,
    order_id: Uuid,
    food_id: Uuid,
    request: OrderItemRequest,
) -> AppResult<OrderItem> {
    let item = db
        .run_in_transaction("create_order_item", move |tx| {
            Box::pin(insert_order_item(tx, order_id, food_id, request))
        })
        .await?;

    tracing::info!(%order_id, %food_id, order_item_id = %item.id, "order item created");
    Ok(item)
}

async fn insert_order_item(
    tx: &mut PgTx,
    order_id: Uuid,
    food_id: Uuid,
    request: OrderItemRequest,
) -> AppResult<OrderItem> {
    gateway::ensure_live(&mut **tx, "orders", order_id, "Order")
        .await
        .step("verify the order")?;
    gateway::ensure_live(&mut **tx, "food", food_id, "Food")
        .await
        .step("verify the food")?;

    let item_id = OrderItemRepository::create(&mut **tx, &request)
        .await
        .step("create the order item entry")?;

    RelationRepository::link(&mut **tx, Relation::OrderOrderItem, order_id, item_id)
        .await
        .step("link the item to the order")?;

    RelationRepository::link(&mut **tx, Relation::OrderItemFood, item_id, food_id)
        .await
        .step("link the item to the food")?;

    OrderItemRepository::get_by_id(&mut **tx, item_id).await
}

/// Item milik order, 404 kalau ordernya tidak ada
pub async fn list_items_for_order(db: &Database, order_id: Uuid) -> AppResult<Vec<OrderItem>> {
    OrderRepository::get_by_id(db.pool(), order_id).await?;
    OrderItemRepository::get_by_order_id(db.pool(), order_id).await
}
