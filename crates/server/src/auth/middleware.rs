use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sqlx::{Pool, Postgres};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_access_token;
use super::session;

/// Permissive auth middleware.
///
/// On each request:
/// 1. Validates the access token (cookie, then Bearer header) and stores
///    its `Claims` in request extensions.
/// 2. If the token is missing or invalid, spends the refresh cookie for a
///    new pair.
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes.
/// 4. Applies refreshed or scheduled cookies to the response.
///
/// Never rejects; extractors and handlers decide authorization.
pub async fn auth_middleware(
    State(pool): State<Pool<Postgres>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut refreshed: Option<(String, String)> = None;

    let claims = cookies::extract_access_token(&headers)
        .and_then(|token| validate_access_token(&token).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
        }
        None => {
            if let Some(raw_refresh) = cookies::extract_refresh_token(&headers) {
                match session::refresh(&pool, &raw_refresh).await {
                    Ok(s) => {
                        if let Ok(claims) = validate_access_token(&s.access_token) {
                            req.extensions_mut().insert(claims);
                        }
                        refreshed = Some((s.access_token, s.refresh_token));
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "transparent refresh failed");
                    }
                }
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some((access, refresh)) = refreshed {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {}
    }

    response
}
