// /restaurant/services/restaurant-service/src/services/billing_service.rs

use uuid::Uuid;

use crate::{
    db::{gateway, BillingRepository, Database, PgTx, Relation, RelationRepository, UserRepository},
    models::{Billing, BillingRequest},
    utils::{AppResult, StepExt},
};

/// Billing -> relasi user/billing -> relasi order/billing
pub async fn create_billing(
    db: &Database,
    user_id: Uuid,
    order_id: Uuid,
    request: BillingRequest,
) -> AppResult<Billing> {
    let billing = db
        .run_in_transaction("create_billing", move |tx| {
            Box::pin(insert_billing_for_order(tx, user_id, order_id, request))
        })
        .await?;

    tracing::info!(%user_id, %order_id, billing_id = %billing.id, "billing created");
    Ok(billing)
}

async fn insert_billing_for_order(
    tx: &mut PgTx,
    user_id: Uuid,
    order_id: Uuid,
    request: BillingRequest,
) -> AppResult<Billing> {
    gateway::ensure_live(&mut **tx, "users", user_id, "User")
        .await
        .step("verify the user")?;
    gateway::ensure_live(&mut **tx, "orders", order_id, "Order")
        .await
        .step("verify the order")?;

    let billing_id = BillingRepository::create(&mut **tx, &request)
        .await
        .step("create the billing entry")?;

    RelationRepository::link(&mut **tx, Relation::UserBilling, user_id, billing_id)
        .await
        .step("link the billing to the user")?;

    RelationRepository::link(&mut **tx, Relation::OrderBilling, order_id, billing_id)
        .await
        .step("link the billing to the order")?;

    BillingRepository::get_by_id(&mut **tx, billing_id).await
}

/// Billing milik user, atau milik order kalau order_id dikirim
pub async fn get_billing_for_user(db: &Database, user_id: Uuid, order_id: Option<Uuid>) -> AppResult<Billing> {
    UserRepository::get_by_id(db.pool(), user_id).await?;

    match order_id {
        Some(order_id) => BillingRepository::get_by_order_id(db.pool(), order_id).await,
        None => BillingRepository::get_by_user_id(db.pool(), user_id).await,
    }
}

/// Soft delete semua billing milik user
pub async fn delete_billings_for_user(db: &Database, user_id: Uuid) -> AppResult<u64> {
    UserRepository::get_by_id(db.pool(), user_id).await?;
    let affected = BillingRepository::soft_delete_by_user_id(db.pool(), user_id).await?;

    tracing::info!(%user_id, affected, "billings of user deleted");
    Ok(affected)
}
