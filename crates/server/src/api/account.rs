use dioxus::prelude::*;
use shared_types::{AuthUser, FeatureFlags, Lang, LoginRequest, RegisterRequest};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

/// Get the current feature flags. No auth required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// The language this request negotiates to (`lang` cookie, then
/// `Accept-Language`). Seeds the UI on first render.
#[server]
pub async fn get_preferred_lang() -> Result<Lang, ServerFnError> {
    Ok(crate::lang::negotiate(None, &request_headers()))
}

/// Create an employer or job seeker account. Sets HTTP-only auth cookies.
#[cfg_attr(feature = "server", tracing::instrument(skip_all, fields(email = %req.email)))]
#[server]
pub async fn register(req: RegisterRequest) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, session};
    use crate::rate_limit::check_server_fn;

    check_server_fn(&request_headers(), "register").map_err(|e| e.into_server_fn_error())?;

    let session = session::register(get_db().await, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_auth_cookies(&session.access_token, &session.refresh_token);
    Ok(session.user)
}

/// Sign in with email and password. Sets HTTP-only auth cookies.
#[cfg_attr(feature = "server", tracing::instrument(skip_all, fields(email = %req.email)))]
#[server]
pub async fn login(req: LoginRequest) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, session};
    use crate::rate_limit::check_server_fn;

    check_server_fn(&request_headers(), "login").map_err(|e| e.into_server_fn_error())?;

    let session = session::login(get_db().await, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_auth_cookies(&session.access_token, &session.refresh_token);
    tracing::info!(user_id = session.user.id, "user signed in");
    Ok(session.user)
}

/// The signed-in user, or `None` for visitors. A token for an account that
/// was removed or deactivated clears the auth cookies.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::cookies;
    use crate::repo;

    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    let user = repo::user::find_by_id(get_db().await, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    match user {
        Some(u) if u.is_active => Ok(Some(AuthUser::from(u))),
        _ => {
            cookies::schedule_clear_cookies();
            tracing::warn!(user_id = claims.sub, "token for unavailable account, clearing cookies");
            Ok(None)
        }
    }
}

/// Revoke the refresh token and clear the auth cookies.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, session};

    let refresh = cookies::extract_refresh_token(&request_headers());
    session::logout(get_db().await, refresh.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_clear_cookies();
    Ok(())
}
