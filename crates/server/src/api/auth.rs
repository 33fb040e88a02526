// Server-only auth helpers for server functions.

use axum::http::HeaderMap;
use dioxus::prelude::*;
use shared_types::{AppError, UserRole};

use crate::auth::extractors::check_role;
use crate::auth::{cookies, jwt};
use crate::error_convert::AppErrorExt;

/// Headers of the request being served, empty outside a request.
pub(crate) fn request_headers() -> HeaderMap {
    dioxus::fullstack::FullstackContext::current()
        .map(|ctx| ctx.parts_mut().headers.clone())
        .unwrap_or_default()
}

/// The caller's claims when signed in. Prefers what the auth middleware
/// injected, falling back to parsing the access token itself.
pub(crate) fn current_claims() -> Option<jwt::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)?;
    jwt::validate_access_token(&token).ok()
}

pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

/// Require a signed-in caller whose role satisfies `role` (admins satisfy all).
pub(crate) fn require_role(role: UserRole) -> Result<jwt::Claims, ServerFnError> {
    let claims = require_auth()?;
    check_role(&claims, role).map_err(|e| e.into_server_fn_error())?;
    Ok(claims)
}
