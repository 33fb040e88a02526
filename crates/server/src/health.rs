use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Record the process start time. Call once during startup.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub db: String,
    /// Round trip of the probe query; absent when the database is unreachable.
    pub db_latency_ms: Option<u64>,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

impl HealthResponse {
    fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Ok => StatusCode::OK,
            HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Liveness plus a database round trip. Answers 503 while Postgres is
/// unreachable so load balancers stop routing to this instance.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> (StatusCode, Json<HealthResponse>) {
    let probe = Instant::now();
    let (status, db, db_latency_ms) = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
    {
        Ok(_) => (
            HealthStatus::Ok,
            "connected".to_string(),
            Some(probe.elapsed().as_millis() as u64),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health probe could not reach the database");
            (HealthStatus::Degraded, format!("error: {e}"), None)
        }
    };

    let body = HealthResponse {
        status,
        db,
        db_latency_ms,
        uptime_seconds: STARTED.get().map_or(0, |t| t.elapsed().as_secs()),
        version: env!("CARGO_PKG_VERSION"),
    };
    (body.http_status(), Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_maps_to_service_unavailable() {
        let body = HealthResponse {
            status: HealthStatus::Degraded,
            db: "error: refused".into(),
            db_latency_ms: None,
            uptime_seconds: 3,
            version: "0.1.0",
        };
        assert_eq!(body.http_status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "degraded");
        assert!(json["db_latency_ms"].is_null());
    }
}
