//! Sign-up, sign-in and token rotation shared by the REST handlers, the
//! server functions and the auth middleware.

use shared_types::{AppError, AuthResponse, AuthUser, LoginRequest, RegisterRequest, User};
use sqlx::{Pool, Postgres};

use super::{jwt, maybe_promote_admin, password};
use crate::config::feature_flags;
use crate::error_convert::ValidateRequest;
use crate::repo;

/// A signed-in user with a fresh token pair.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<Session> for AuthResponse {
    fn from(s: Session) -> Self {
        Self {
            user: s.user,
            access_token: s.access_token,
            refresh_token: s.refresh_token,
        }
    }
}

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Mint an access/refresh pair and persist the refresh token's hash.
pub async fn issue(pool: &Pool<Postgres>, user: AuthUser) -> Result<Session, AppError> {
    let role = user.role.as_str();
    let access_token = jwt::create_access_token(user.id, &user.email, role)
        .map_err(|e| AppError::internal(format!("Failed to create access token: {e}")))?;
    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email, role)
        .map_err(|e| AppError::internal(format!("Failed to create refresh token: {e}")))?;

    repo::refresh_token::store(pool, user.id, &jwt::hash_token(&refresh_token), expires_at).await?;

    Ok(Session {
        user,
        access_token,
        refresh_token,
    })
}

async fn with_promotion(pool: &Pool<Postgres>, user: User) -> AuthUser {
    let mut auth_user = AuthUser::from(user);
    auth_user.role = maybe_promote_admin(pool, auth_user.id, &auth_user.email, auth_user.role).await;
    auth_user
}

pub async fn register(pool: &Pool<Postgres>, req: &RegisterRequest) -> Result<Session, AppError> {
    if !feature_flags().registration_open() {
        return Err(AppError::forbidden("Registration is by invitation only"));
    }
    req.validate_request()?;
    if !req.role.is_self_registrable() {
        return Err(AppError::field("role", "Choose employer or job seeker"));
    }

    let hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    let user = repo::user::create(pool, &req.email, &hash, &req.display_name, req.role).await?;
    tracing::info!(user_id = user.id, role = %user.role, "user registered");

    let auth_user = with_promotion(pool, user).await;
    issue(pool, auth_user).await
}

/// Check credentials. Unknown email and wrong password share one message.
pub async fn login(pool: &Pool<Postgres>, req: &LoginRequest) -> Result<Session, AppError> {
    req.validate_request()?;

    let creds = repo::user::find_credentials(pool, &req.email)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let matches = password::verify_password(&req.password, &creds.password_hash)
        .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;
    if !matches {
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }
    if !creds.user.is_active {
        return Err(AppError::forbidden("This account has been deactivated"));
    }

    let auth_user = with_promotion(pool, creds.user).await;
    issue(pool, auth_user).await
}

/// Spend a refresh token and issue a new pair. The role is re-read from
/// the database so role and activation changes apply on the next refresh.
pub async fn refresh(pool: &Pool<Postgres>, raw_refresh: &str) -> Result<Session, AppError> {
    let claims = jwt::validate_refresh_token(raw_refresh)
        .map_err(|_| AppError::unauthorized("Invalid refresh token"))?;

    if !repo::refresh_token::consume(pool, claims.sub, &jwt::hash_token(raw_refresh)).await? {
        return Err(AppError::unauthorized("Session expired, please sign in again"));
    }

    let user = repo::user::find_by_id(pool, claims.sub)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::unauthorized("Account is not available"))?;

    issue(pool, AuthUser::from(user)).await
}

/// Revoke the presented refresh token, if any.
pub async fn logout(pool: &Pool<Postgres>, raw_refresh: Option<&str>) -> Result<(), AppError> {
    if let Some(raw) = raw_refresh {
        repo::refresh_token::revoke_by_hash(pool, &jwt::hash_token(raw)).await?;
    }
    Ok(())
}
