use chrono::{DateTime, Utc};
use shared_types::AppError;
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Persist the hash of a freshly minted refresh token.
pub async fn store(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Revoke a live token for `user_id`. Returns false when the token is
/// unknown, expired or already revoked, so a token can be spent only once.
pub async fn consume(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE refresh_tokens SET revoked = TRUE
         WHERE token_hash = $1 AND user_id = $2 AND revoked = FALSE AND expires_at > NOW()",
    )
    .bind(token_hash)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected() > 0)
}

pub async fn revoke_by_hash(pool: &Pool<Postgres>, token_hash: &str) -> Result<(), AppError> {
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// Sign a user out everywhere, e.g. when an admin deactivates the account.
pub async fn revoke_all_for_user(pool: &Pool<Postgres>, user_id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE")
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
