use axum::http::{header, HeaderMap, HeaderValue};
use cookie::{Cookie, CookieBuilder};
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "jb_access";
pub const REFRESH_COOKIE: &str = "jb_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

fn base_cookie<'a>(name: &'a str, value: &'a str) -> CookieBuilder<'a> {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .secure(cookie_secure());
    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }
    cookie
}

fn to_header(cookie: CookieBuilder<'_>) -> Option<HeaderValue> {
    HeaderValue::from_str(&cookie.build().to_string()).ok()
}

/// Set-Cookie value for the access token.
pub fn build_access_cookie(token: &str, max_age_minutes: i64) -> Option<HeaderValue> {
    to_header(
        base_cookie(ACCESS_COOKIE, token)
            .max_age(cookie::time::Duration::seconds(max_age_minutes * 60)),
    )
}

/// Set-Cookie value for the refresh token.
pub fn build_refresh_cookie(token: &str, max_age_days: i64) -> Option<HeaderValue> {
    to_header(
        base_cookie(REFRESH_COOKIE, token)
            .max_age(cookie::time::Duration::seconds(max_age_days * 86_400)),
    )
}

/// Set-Cookie values that expire both auth cookies.
pub fn build_clear_cookies() -> Vec<HeaderValue> {
    [ACCESS_COOKIE, REFRESH_COOKIE]
        .into_iter()
        .filter_map(|name| to_header(base_cookie(name, "").max_age(cookie::time::Duration::ZERO)))
        .collect()
}

/// Access token from the cookie (web app) or the Bearer header (REST clients).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

pub(crate) fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Append both auth cookies using the configured token lifetimes.
pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    let cookies = [
        build_access_cookie(access_token, jwt::access_token_expiry_minutes()),
        build_refresh_cookie(refresh_token, jwt::refresh_token_expiry_days()),
    ];
    for value in cookies.into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    for value in build_clear_cookies() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the auth
/// middleware once the response is built.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Per-request slot the middleware puts in request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(action);
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.put(action);
        }
    }
}

/// Ask the middleware to set auth cookies. Called from server functions.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Ask the middleware to clear auth cookies. Called from server functions.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_beats_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(extract_access_token(&headers).as_deref(), Some("from-header"));

        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; jb_access=from-cookie"),
        );
        assert_eq!(extract_access_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn refresh_cookie_is_read() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("jb_refresh=abc"));
        assert_eq!(extract_refresh_token(&headers).as_deref(), Some("abc"));
        assert_eq!(extract_access_token(&headers), None);
    }

    #[test]
    fn access_cookie_is_http_only() {
        let value = build_access_cookie("tok", 15).unwrap();
        let text = value.to_str().unwrap();
        assert!(text.starts_with("jb_access=tok"));
        assert!(text.contains("HttpOnly"));
        assert!(text.contains("Max-Age=900"));
    }

    #[test]
    fn clearing_expires_both() {
        let mut headers = HeaderMap::new();
        clear_auth_cookies(&mut headers);
        let values: Vec<_> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.contains("Max-Age=0")));
    }

    #[test]
    fn slot_hands_over_once() {
        let slot = CookieSlot::default();
        slot.put(PendingCookieAction::Clear);
        assert_eq!(slot.take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }
}
