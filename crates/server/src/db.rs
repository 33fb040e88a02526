use axum::extract::FromRef;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::rate_limit::RateLimitState;

/// Shared state for the REST router. `FromRef` lets handlers extract
/// `State<Pool<Postgres>>` or `State<RateLimitState>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub limiter: RateLimitState,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            limiter: RateLimitState::from_env(),
        }
    }
}

/// Pool created lazily; no connections open until the first query, so the
/// pool is not tied to whichever tokio runtime happened to build it.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Build the connection pool from `DATABASE_URL` / `DATABASE_MAX_CONNECTIONS`.
///
/// Panics at startup when `DATABASE_URL` is missing or malformed.
pub fn create_pool() -> Pool<Postgres> {
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    pool_for_url(&database_url)
}

/// Lazy pool for an explicit URL. Used by the integration tests.
pub fn pool_for_url(database_url: &str) -> Pool<Postgres> {
    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(database_url)
        .expect("Failed to create database pool")
}

/// Apply the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Process-wide pool for server functions. Migrations run on the first call.
/// REST handlers receive the pool through `AppState` instead.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    if !MIGRATED.swap(true, Ordering::SeqCst) {
        if let Err(e) = run_migrations(pool).await {
            tracing::error!(error = %e, "database migrations failed");
        }
    }

    pool
}
