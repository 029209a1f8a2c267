// /restaurant/services/restaurant-service/src/services/address_service.rs

use uuid::Uuid;

use crate::{
    db::{gateway, AddressRepository, Database, PgTx, Relation, RelationRepository, UserRepository},
    models::{Address, AddressRequest},
    utils::{AppResult, StepExt},
};

/// Membuat alamat lalu menghubungkannya ke user
pub async fn create_address(db: &Database, user_id: Uuid, request: AddressRequest) -> AppResult<Address> {
    let address = db
        .run_in_transaction("create_address", move |tx| {
            Box::pin(insert_address_for_user(tx, user_id, request))
        })
        .await?;

    tracing::info!(%user_id, address_id = %address.id, "address created");
    Ok(address)
}

async fn insert_address_for_user(tx: &mut PgTx, user_id: Uuid, request: AddressRequest) -> AppResult<Address> {
    gateway::ensure_live(&mut **tx, "users", user_id, "User")
        .await
        .step("verify the user")?;

    let address_id = AddressRepository::create(&mut **tx, &request)
        .await
        .step("create the address entry")?;

    RelationRepository::link(&mut **tx, Relation::UserAddress, user_id, address_id)
        .await
        .step("link the address to the user")?;

    AddressRepository::get_by_id(&mut **tx, address_id).await
}

/// Alamat milik user, 404 kalau user atau alamatnya tidak ada
pub async fn get_address_for_user(db: &Database, user_id: Uuid) -> AppResult<Address> {
    UserRepository::get_by_id(db.pool(), user_id).await?;
    AddressRepository::get_by_user_id(db.pool(), user_id).await
}

/// Soft delete semua alamat milik user
pub async fn delete_addresses_for_user(db: &Database, user_id: Uuid) -> AppResult<u64> {
    UserRepository::get_by_id(db.pool(), user_id).await?;
    let affected = AddressRepository::soft_delete_by_user_id(db.pool(), user_id).await?;

    tracing::info!(%user_id, affected, "addresses of user deleted");
    Ok(affected)
}
