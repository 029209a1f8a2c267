// /restaurant/services/restaurant-service/src/services/user_service.rs

use std::collections::HashMap;
use std::time::Duration;

use uuid::Uuid;

use crate::{
    core::{JwtService, SecurityService},
    db::{Database, InterestRepository, PgTx, Relation, RelationRepository, UserRepository},
    models::{
        CreateUserRequest, Interest, LoginRequest, LoginResponse, NewInterest, NewUser, UpdateUserRequest,
        UserUpdate, UserWithInterest,
    },
    utils::{AppError, AppResult, StepExt},
};

/// Jeda sebelum membalas login yang gagal
const FAILED_LOGIN_DELAY: Duration = Duration::from_millis(200);

// ===== SIGNUP =====

/// Signup: user -> interest -> relasi user/interest dalam satu transaksi
pub async fn create_user(
    db: &Database,
    security: &SecurityService,
    request: CreateUserRequest,
) -> AppResult<UserWithInterest> {
    let CreateUserRequest { user, interest } = request;

    // Cek duplikat dulu biar pesan error jelas, unique index tetap jadi pengaman terakhir
    if UserRepository::exists_by_phone(db.pool(), &user.phone).await? {
        return Err(AppError::Conflict("phone number is already registered".to_string()));
    }
    if UserRepository::exists_by_email(db.pool(), &user.email).await? {
        return Err(AppError::Conflict("email is already registered".to_string()));
    }

    let password_hash = security.hash_password(&user.password)?;

    let created = db
        .run_in_transaction("create_user", move |tx| {
            Box::pin(insert_user_with_interest(tx, user, interest, password_hash))
        })
        .await?;

    tracing::info!(user_id = %created.user.id, "user registered");
    Ok(created)
}

async fn insert_user_with_interest(
    tx: &mut PgTx,
    user: NewUser,
    interest: NewInterest,
    password_hash: String,
) -> AppResult<UserWithInterest> {
    let user_id = UserRepository::create(&mut **tx, &user, &password_hash)
        .await
        .step("create the user entry")?;

    let interest_id = InterestRepository::create(&mut **tx, &interest)
        .await
        .step("create the interest entry")?;

    RelationRepository::link(&mut **tx, Relation::UserInterest, user_id, interest_id)
        .await
        .step("link the user to the interest")?;

    let user = UserRepository::get_by_id(&mut **tx, user_id).await?;
    let interest = InterestRepository::get_by_id(&mut **tx, interest_id).await?;

    Ok(UserWithInterest {
        user,
        interest: Some(interest),
    })
}

// ===== READ =====

/// User beserta interest-nya
pub async fn get_user(db: &Database, user_id: Uuid) -> AppResult<UserWithInterest> {
    let user = UserRepository::get_by_id(db.pool(), user_id).await?;
    let interest = optional(InterestRepository::get_by_user_id(db.pool(), user_id).await)?;

    Ok(UserWithInterest { user, interest })
}

/// Semua user, masing-masing dengan interest-nya
pub async fn list_users(db: &Database, include_deleted: bool) -> AppResult<Vec<UserWithInterest>> {
    let users = UserRepository::get_all(db.pool(), include_deleted).await?;
    let interests = InterestRepository::get_all_with_user(db.pool()).await?;

    let mut by_user: HashMap<Uuid, Interest> = interests
        .into_iter()
        .map(|row| (row.user_id, row.interest))
        .collect();

    Ok(users
        .into_iter()
        .map(|user| {
            let interest = by_user.remove(&user.id);
            UserWithInterest { user, interest }
        })
        .collect())
}

// ===== UPDATE & DELETE =====

/// Partial update user lalu interest-nya (kalau dikirim) dalam satu transaksi
pub async fn update_user(
    db: &Database,
    security: &SecurityService,
    user_id: Uuid,
    request: UpdateUserRequest,
) -> AppResult<UserWithInterest> {
    let UpdateUserRequest { user, interest } = request;

    if user.is_empty() && interest.is_none() {
        return Err(AppError::Validation("request contains no fields to update".to_string()));
    }

    let password_hash = match &user.password {
        Some(password) => Some(security.hash_password(password)?),
        None => None,
    };

    db.run_in_transaction("update_user", move |tx| {
        Box::pin(update_user_with_interest(tx, user_id, user, interest, password_hash))
    })
    .await
}

async fn update_user_with_interest(
    tx: &mut PgTx,
    user_id: Uuid,
    update: UserUpdate,
    interest: Option<NewInterest>,
    password_hash: Option<String>,
) -> AppResult<UserWithInterest> {
    let user = UserRepository::update(&mut **tx, user_id, &update, password_hash.as_deref())
        .await
        .step("update the user entry")?;

    let interest = match interest {
        Some(interest) => Some(
            InterestRepository::update_by_user_id(&mut **tx, user_id, &interest)
                .await
                .step("update the user's interest")?,
        ),
        None => optional(InterestRepository::get_by_user_id(&mut **tx, user_id).await)?,
    };

    Ok(UserWithInterest { user, interest })
}

/// Soft delete user lalu interest yang terhubung lewat relation_table
pub async fn delete_user(db: &Database, user_id: Uuid) -> AppResult<()> {
    db.run_in_transaction("delete_user", move |tx| Box::pin(delete_user_with_interest(tx, user_id)))
        .await?;

    tracing::info!(%user_id, "user deleted");
    Ok(())
}

async fn delete_user_with_interest(tx: &mut PgTx, user_id: Uuid) -> AppResult<()> {
    UserRepository::soft_delete(&mut **tx, user_id)
        .await
        .step("delete the user entry")?;

    InterestRepository::soft_delete_by_user_id(&mut **tx, user_id)
        .await
        .step("delete the user's interest")?;

    Ok(())
}

// ===== LOGIN =====

/// Login dengan email + password, return bearer token
pub async fn login(
    db: &Database,
    security: &SecurityService,
    jwt: &JwtService,
    request: LoginRequest,
) -> AppResult<LoginResponse> {
    let user = match UserRepository::find_by_email(db.pool(), &request.email).await {
        Ok(user) => Some(user),
        Err(AppError::NotFound(_)) => None,
        Err(e) => return Err(e),
    };

    let user = match user {
        Some(user) if security.verify_password(&request.password, &user.password_hash) => user,
        _ => {
            tracing::warn!("Failed login attempt for {}", request.email);
            tokio::time::sleep(FAILED_LOGIN_DELAY).await;
            return Err(AppError::Unauthorized("invalid email or password".to_string()));
        }
    };

    let token = jwt.generate_token(user.id)?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(LoginResponse {
        token,
        token_type: "Bearer",
        expires_in: jwt.expires_in_seconds(),
        user_id: user.id,
    })
}

/// NotFound diubah jadi None, error lain diteruskan
fn optional<T>(result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
