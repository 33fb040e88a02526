use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared_types::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::config::feature_flags;

/// Keys tracked before stale entries are swept.
const SWEEP_THRESHOLD: usize = 10_000;

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
}

struct RateLimitInner {
    /// Client key -> request timestamps inside the window.
    requests: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimitState {
    /// Allow `max_requests` per `window` for each client key.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                requests: HashMap::new(),
                max_requests,
                window,
            })),
        }
    }

    /// Limits from `RATE_LIMIT_MAX_REQUESTS` (default 10) and
    /// `RATE_LIMIT_WINDOW_SECS` (default 60).
    pub fn from_env() -> Self {
        let max_requests = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let window_secs = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);
        Self::new(max_requests, Duration::from_secs(window_secs))
    }

    /// Record a request from `key`; false when the key is over its budget.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let window = inner.window;
        let max = inner.max_requests;
        let fresh = |t: &Instant| now.saturating_duration_since(*t) < window;

        if inner.requests.len() > SWEEP_THRESHOLD {
            inner.requests.retain(|_, stamps| stamps.iter().any(fresh));
        }

        let stamps = inner.requests.entry(key.to_string()).or_default();
        stamps.retain(fresh);

        if stamps.len() as u32 >= max {
            return false;
        }

        stamps.push(now);
        true
    }
}

/// Best-effort client address: first `X-Forwarded-For` hop, then `X-Real-IP`.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
        })
        .unwrap_or("unknown")
        .to_string()
}

/// Limiter for server functions, which run outside the REST router state.
static SERVER_FN_LIMITER: OnceLock<RateLimitState> = OnceLock::new();

/// Throttle a server function call by client address and operation name.
/// A no-op unless the `rate_limit` feature flag is on.
pub fn check_server_fn(headers: &HeaderMap, operation: &str) -> Result<(), AppError> {
    if !feature_flags().rate_limit {
        return Ok(());
    }
    let limiter = SERVER_FN_LIMITER.get_or_init(RateLimitState::from_env);
    let key = format!("{}:{operation}", client_key(headers));
    if limiter.check(&key) {
        Ok(())
    } else {
        tracing::warn!(key = %key, "rate limit exceeded");
        Err(AppError::rate_limited("Too many requests. Please try again later."))
    }
}

/// Throttle a route per client address and path. A no-op unless the
/// `rate_limit` feature flag is on.
pub async fn rate_limit_middleware(
    State(state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    if !feature_flags().rate_limit {
        return next.run(request).await;
    }

    let key = format!(
        "{}:{}",
        client_key(request.headers()),
        request.uri().path()
    );

    if !state.check(&key) {
        tracing::warn!(key = %key, "rate limit exceeded");
        return AppError::rate_limited("Too many requests. Please try again later.")
            .into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn blocks_after_budget_is_spent() {
        let limiter = RateLimitState::new(2, Duration::from_secs(60));
        assert!(limiter.check("1.2.3.4:/api/auth/login"));
        assert!(limiter.check("1.2.3.4:/api/auth/login"));
        assert!(!limiter.check("1.2.3.4:/api/auth/login"));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = RateLimitState::new(1, Duration::from_secs(60));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
        assert!(limiter.check("b"));
    }

    #[test]
    fn window_slides() {
        let limiter = RateLimitState::new(1, Duration::from_secs(10));
        let start = Instant::now();
        assert!(limiter.check_at("k", start));
        assert!(!limiter.check_at("k", start + Duration::from_secs(5)));
        assert!(limiter.check_at("k", start + Duration::from_secs(11)));
    }

    #[test]
    fn client_key_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_key(&headers), "unknown");

        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.9"));
        assert_eq!(client_key(&headers), "10.0.0.9");

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers), "203.0.113.7");
    }
}
