use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Router,
};
use serde_json::{json, Value};
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test holds it from truncation until it finishes.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

const ALL_TABLES: &str = "saved_jobs, applications, jobs, contacts, company_profiles, \
    employee_profiles, refresh_tokens, users";

pub const PASSWORD: &str = "Password123!";

/// Build a test router backed by a real Postgres pool, with every table
/// emptied. The returned `MutexGuard` must be held for the whole test.
///
/// `None` when neither `TEST_DATABASE_URL` nor `DATABASE_URL` is set; the
/// calling test then returns early.
pub async fn test_app() -> Option<(Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>)> {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();
    if std::env::var("JWT_SECRET").is_err() {
        unsafe { std::env::set_var("JWT_SECRET", "integration-test-secret") };
    }

    let Ok(database_url) =
        std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL"))
    else {
        eprintln!("skipping: TEST_DATABASE_URL is not set");
        return None;
    };

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    server::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query(&format!("TRUNCATE {ALL_TABLES} RESTART IDENTITY CASCADE"))
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    let state = server::db::AppState::new(pool.clone());
    // Same layering as the app binary: the auth middleware resolves bearer
    // tokens and cookies, the role extractors do the gating.
    let router = server::rest::api_router(&state)
        .layer(middleware::from_fn_with_state(
            pool.clone(),
            server::auth::middleware::auth_middleware,
        ))
        .with_state(state);

    Some((router, pool, guard))
}

/// A signed-up account: its id and access token.
pub struct TestUser {
    pub id: i64,
    pub token: String,
}

/// Register `email` with `role` ("employer" or "employee") through the API.
pub async fn register(app: &Router, email: &str, role: &str) -> TestUser {
    let body = json!({
        "email": email,
        "password": PASSWORD,
        "display_name": email.split('@').next().unwrap_or(email),
        "role": role,
    });
    let (status, resp) = request(app, "POST", "/api/auth/register", Some(body), None).await;
    assert_eq!(status, StatusCode::CREATED, "register {email}: {resp}");
    TestUser {
        id: resp["data"]["user"]["id"].as_i64().unwrap(),
        token: resp["data"]["access_token"].as_str().unwrap().to_string(),
    }
}

/// Insert an admin row directly and mint a token for it.
pub async fn admin(pool: &Pool<Postgres>) -> TestUser {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, password_hash, display_name, role)
         VALUES ('admin@test.com', 'unused', 'Admin', 'admin')
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .expect("Failed to seed admin");

    let token = server::auth::jwt::create_access_token(id, "admin@test.com", "admin")
        .expect("Failed to create test JWT");
    TestUser { id, token }
}

/// A valid job body; `submit` sends it straight to moderation.
pub fn job_body(title: &str, submit: bool) -> Value {
    json!({
        "title": title,
        "title_ar": "وظيفة اختبار",
        "description": "A sufficiently long description of the role and its duties.",
        "location": "Riyadh",
        "category": "technology",
        "job_type": "full_time",
        "salary_min": 8000,
        "salary_max": 12000,
        "currency": "sar",
        "is_remote": false,
        "submit_for_review": submit,
    })
}

/// Create a job as `employer` and return its id.
pub async fn create_job(app: &Router, employer: &TestUser, title: &str, submit: bool) -> String {
    let (status, resp) = request(
        app,
        "POST",
        "/api/employer/jobs",
        Some(job_body(title, submit)),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create job: {resp}");
    resp["data"]["id"].as_str().unwrap().to_string()
}

/// Create, submit and approve a job so it is publicly listed.
pub async fn active_job(app: &Router, employer: &TestUser, admin: &TestUser, title: &str) -> String {
    let id = create_job(app, employer, title, true).await;
    let (status, resp) = request(
        app,
        "POST",
        &format!("/api/admin/jobs/{id}/approve"),
        None,
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "approve: {resp}");
    id
}

/// Apply to `job_id` as `employee` and return the application id.
pub async fn apply(app: &Router, employee: &TestUser, job_id: &str) -> String {
    let (status, resp) = request(
        app,
        "POST",
        "/api/employee/applications",
        Some(json!({ "job_id": job_id, "cover_letter": "I would love to join." })),
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "apply: {resp}");
    resp["data"]["id"].as_str().unwrap().to_string()
}

/// Send a request with an optional JSON body and bearer token.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let req = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    send(app, req).await
}

/// GET, optionally authenticated.
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(app, "GET", uri, None, token).await
}

/// Send a request through the router and parse the response.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
