use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{
    t, ApiResponse, AppError, AuthResponse, AuthUser, LoginRequest, Msg, RefreshRequest,
    RegisterRequest,
};

use super::{ok, ApiResult};
use crate::auth::cookies;
use crate::auth::extractors::AuthRequired;
use crate::auth::session::{self, Session};
use crate::lang::RequestLang;
use crate::repo;

type SessionReply = Result<(StatusCode, HeaderMap, Json<ApiResponse<AuthResponse>>), AppError>;

/// Session body plus the auth cookies for browser clients.
fn session_reply(status: StatusCode, session: Session) -> SessionReply {
    let mut headers = HeaderMap::new();
    cookies::set_auth_cookies(&mut headers, &session.access_token, &session.refresh_token);
    Ok((status, headers, Json(ApiResponse::ok(session.into()))))
}

/// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthResponse>),
        (status = 403, description = "Registration closed", body = AppError),
        (status = 409, description = "Email already registered", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, payload), fields(email = %payload.email))]
pub async fn register(
    State(pool): State<Pool<Postgres>>,
    Json(payload): Json<RegisterRequest>,
) -> SessionReply {
    let session = session::register(&pool, &payload).await?;
    session_reply(StatusCode::CREATED, session)
}

/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid email or password", body = AppError),
        (status = 403, description = "Account deactivated", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, payload), fields(email = %payload.email))]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(payload): Json<LoginRequest>,
) -> SessionReply {
    let session = session::login(&pool, &payload).await?;
    tracing::info!(user_id = session.user.id, "user signed in");
    session_reply(StatusCode::OK, session)
}

/// POST /api/auth/refresh
///
/// Takes the refresh token from the body, or from the refresh cookie when
/// no body is sent.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body(content = Option<RefreshRequest>, description = "Omit to use the refresh cookie"),
    responses(
        (status = 200, description = "New token pair", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Refresh token invalid, spent or expired", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn refresh(
    State(pool): State<Pool<Postgres>>,
    headers: HeaderMap,
    body: Option<Json<RefreshRequest>>,
) -> SessionReply {
    let raw = body
        .map(|Json(b)| b.refresh_token)
        .filter(|t| !t.is_empty())
        .or_else(|| cookies::extract_refresh_token(&headers))
        .ok_or_else(|| AppError::unauthorized("Refresh token required"))?;

    let session = session::refresh(&pool, &raw).await?;
    session_reply(StatusCode::OK, session)
}

/// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    request_body(content = Option<RefreshRequest>, description = "Omit to use the refresh cookie"),
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<String>)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn logout(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    headers: HeaderMap,
    body: Option<Json<RefreshRequest>>,
) -> Result<(HeaderMap, Json<ApiResponse<()>>), AppError> {
    let raw = body
        .map(|Json(b)| b.refresh_token)
        .or_else(|| cookies::extract_refresh_token(&headers));
    session::logout(&pool, raw.as_deref()).await?;

    let mut out = HeaderMap::new();
    cookies::clear_auth_cookies(&mut out);
    Ok((out, Json(ApiResponse::message_only(t(lang, Msg::LoggedOut)))))
}

/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The signed-in user", body = ApiResponse<AuthUser>),
        (status = 401, description = "Not signed in", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn me(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(auth): AuthRequired,
) -> ApiResult<AuthUser> {
    let user = repo::user::find_by_id(&pool, auth.sub)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::unauthorized("Account is not available"))?;
    ok(AuthUser::from(user))
}
