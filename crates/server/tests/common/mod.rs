use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Router,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use tower::ServiceExt;

/// Tables to truncate before the first test (children before parents).
const ALL_TABLES: &str = "saved_jobs, applications, jobs, contacts, company_profiles, \
    employee_profiles, refresh_tokens, users";

/// One-time flag so the test database is only prepared once per process.
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Create `<db>_test` next to `DATABASE_URL` and point `DATABASE_URL` at it,
/// so every pool built afterwards uses the test database.
async fn ensure_test_db() {
    let _ = dotenvy::dotenv();
    if std::env::var("JWT_SECRET").is_err() {
        unsafe { std::env::set_var("JWT_SECRET", "integration-test-secret") };
    }
    let original_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let (base_url, db_name) = original_url
        .rsplit_once('/')
        .expect("DATABASE_URL must contain a database name");
    let test_db_name = format!("{}_test", db_name);
    let test_url = format!("{}/{}", base_url, test_db_name);

    let admin_url = format!("{}/postgres", base_url);
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres admin database");

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&test_db_name)
            .fetch_one(&admin_pool)
            .await
            .expect("Failed to check for test database");

    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{}\"", test_db_name))
            .execute(&admin_pool)
            .await
            .expect("Failed to create test database");
    }

    admin_pool.close().await;

    unsafe { std::env::set_var("DATABASE_URL", &test_url) };
}

/// Pool on the test database. The first call migrates and truncates.
pub async fn test_pool() -> Pool<Postgres> {
    if INITIALIZED.get().is_none() {
        ensure_test_db().await;
    }

    let pool = server::db::create_pool();

    if INITIALIZED.set(()).is_ok() {
        server::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        sqlx::query(&format!("TRUNCATE {} CASCADE", ALL_TABLES))
            .execute(&pool)
            .await
            .expect("Failed to truncate test tables");
    }

    pool
}

#[allow(dead_code)]
/// The full HTTP surface (REST, /health, /docs) with the auth middleware,
/// layered the same way the app binary does it.
pub async fn test_app() -> (Router, Pool<Postgres>) {
    let pool = test_pool().await;
    let app = server::openapi::api_router(pool.clone()).layer(middleware::from_fn_with_state(
        pool.clone(),
        server::auth::middleware::auth_middleware,
    ));
    (app, pool)
}

#[allow(dead_code)]
/// Unique email for test isolation.
pub fn unique_email(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{prefix}_{ts}_{id}@test.com")
}

#[allow(dead_code)]
/// Register through the REST API and return (status, body).
pub async fn register(app: &Router, email: &str, password: &str, role: &str) -> (StatusCode, String) {
    let json = serde_json::json!({
        "email": email,
        "password": password,
        "display_name": "Test User",
        "role": role,
    });
    send(app, "POST", "/api/auth/register", Some(json.to_string()), None, &[]).await
}

#[allow(dead_code)]
/// Register and return the access token.
pub async fn register_token(app: &Router, prefix: &str, role: &str) -> String {
    let (status, body) = register(app, &unique_email(prefix), "Password123!", role).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    json["data"]["access_token"].as_str().unwrap().to_string()
}

/// One request through the router: (status, body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    json: Option<String>,
    token: Option<&str>,
    headers: &[(&str, &str)],
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if json.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = json.map(Body::from).unwrap_or_else(Body::empty);

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// GET, optionally authenticated.
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, String) {
    send(app, "GET", uri, None, token, &[]).await
}

#[allow(dead_code)]
/// POST with a JSON body, optionally authenticated.
pub async fn post_json(
    app: &Router,
    uri: &str,
    json: &serde_json::Value,
    token: Option<&str>,
) -> (StatusCode, String) {
    send(app, "POST", uri, Some(json.to_string()), token, &[]).await
}
