// /restaurant/services/restaurant-service/src/main.rs

mod api;
mod core;
mod db;
mod middleware;
mod models;
mod services;
mod utils;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    Router,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    core::{JwtService, SecurityService},
    db::Database,
    utils::{init_logger, AppConfig, AppError, AppResult},
};

const DB_CONNECT_ATTEMPTS: u32 = 3;
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// State aplikasi dengan semua shared services
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt_service: Arc<JwtService>,
    pub security: Arc<SecurityService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            db: Database::new(pool),
            jwt_service: Arc::new(JwtService::new(&config)),
            security: Arc::new(SecurityService::new(config.password_pepper.as_bytes())),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::from_filename("../../.env").ok();
    dotenvy::dotenv().ok();

    init_logger();

    if let Err(e) = run().await {
        tracing::error!("❌ Restaurant service stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;

    // Setup database connection dengan retry logic
    let pool = create_database_pool(&config)?;
    test_database_connection(&pool).await?;
    info!("✅ Database connection established successfully");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| AppError::Database(format!("migration failed: {}", e)))?;
    info!("✅ Database migrations applied");

    let bind_address = config.bind_address();
    let environment = config.environment.clone();
    let app = build_app(AppState::new(pool, config));

    print_startup_info(&bind_address, &environment);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::Configuration(format!("failed to bind to {}: {}", bind_address, e)))?;

    info!("🚀 Restaurant Service started successfully at {}", bind_address);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .map_err(|e| AppError::Internal(format!("server error: {}", e)))
}

/// Router lengkap dengan global middleware (tracing, timeout, CORS)
fn build_app(state: AppState) -> Router {
    let cors = setup_cors(&state.config);

    api::create_routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, HTTP_REQUEST_TIMEOUT))
            .layer(cors),
    )
}

/// Membuat database connection pool dari konfigurasi.
/// Pool dibuat lazy, koneksi pertama dibuka oleh `test_database_connection`.
fn create_database_pool(config: &AppConfig) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .connect_lazy(&config.database_url)
        .map_err(|e| AppError::Configuration(format!("invalid DATABASE_URL: {}", e)))
}

/// Test database connection dengan retry mechanism
async fn test_database_connection(pool: &PgPool) -> AppResult<()> {
    let mut attempt = 1;
    loop {
        match sqlx::query("SELECT 1").fetch_one(pool).await {
            Ok(_) => return Ok(()),
            Err(e) if attempt >= DB_CONNECT_ATTEMPTS => {
                return Err(AppError::Database(format!(
                    "database connection failed after {} attempts: {}",
                    attempt, e
                )))
            }
            Err(e) => {
                tracing::warn!("Database connection attempt {} failed: {}", attempt, e);
                tokio::time::sleep(Duration::from_secs(2)).await;
                attempt += 1;
            }
        }
    }
}

/// Setup CORS policy berdasarkan environment
fn setup_cors(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let methods = if config.is_development() {
        vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS]
    } else {
        vec![Method::GET, Method::POST, Method::PUT, Method::DELETE]
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
}

/// Print startup information untuk monitoring
fn print_startup_info(bind_address: &str, environment: &str) {
    info!("🚀 Restaurant Service starting at {}", bind_address);
    info!("📋 Available endpoints:");
    info!("  Public endpoints:");
    info!("    GET  /health                       - Health check");
    info!("    POST /user                         - Signup (user + interest)");
    info!("    POST /user/login                   - Login, returns bearer token");
    info!("    *    /food, /table, /orderItem     - Menu, tables, order items");
    info!("    GET  /address, /billing, /order, /booking");
    info!("  Protected endpoints (JWT required):");
    info!("    *    /user/{{userId}}                - Profile read/update/delete");
    info!("    *    /user/{{userId}}/address        - Addresses");
    info!("    *    /user/{{userId}}/billing        - Billings");
    info!("    *    /user/{{userId}}/order          - Orders");
    info!("    *    /user/{{userId}}/booking        - Table bookings");
    info!("🌍 Environment: {}", environment);
}
