use shared_types::{AppError, User, UserRole};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

const USER_COLUMNS: &str = "id, email, display_name, role, is_active, created_at";

/// A user row together with its password hash. Never leaves the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

pub async fn create(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    display_name: &str,
    role: UserRole,
) -> Result<User, AppError> {
    let sql = format!(
        "INSERT INTO users (email, password_hash, display_name, role)
         VALUES ($1, $2, $3, $4)
         RETURNING {USER_COLUMNS}"
    );
    sqlx::query_as::<_, User>(&sql)
        .bind(email.trim())
        .bind(password_hash)
        .bind(display_name.trim())
        .bind(role.as_str())
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Case-insensitive lookup used by login.
pub async fn find_credentials(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<UserCredentials>, AppError> {
    let sql = format!(
        "SELECT {USER_COLUMNS}, password_hash FROM users WHERE lower(email) = lower($1)"
    );
    sqlx::query_as::<_, UserCredentials>(&sql)
        .bind(email.trim())
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<User>, AppError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Admin listing: optional name/email search and role filter, newest first.
pub async fn search(
    pool: &Pool<Postgres>,
    q: Option<&str>,
    role: Option<&str>,
    page: i64,
    limit: i64,
) -> Result<(Vec<User>, i64), AppError> {
    let pattern = super::like_pattern(q);
    let offset = shared_types::page_offset(page, limit);
    let filter = "($1::TEXT IS NULL OR email ILIKE $1 OR display_name ILIKE $1)
                  AND ($2::TEXT IS NULL OR role = $2)";

    let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM users WHERE {filter}"))
        .bind(pattern.as_deref())
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE {filter}
         ORDER BY created_at DESC, id DESC
         LIMIT $3 OFFSET $4"
    ))
    .bind(pattern.as_deref())
    .bind(role)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

pub async fn set_active(
    pool: &Pool<Postgres>,
    id: i64,
    is_active: bool,
) -> Result<Option<User>, AppError> {
    let sql = format!(
        "UPDATE users SET is_active = $2, updated_at = NOW()
         WHERE id = $1
         RETURNING {USER_COLUMNS}"
    );
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(is_active)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn set_role(pool: &Pool<Postgres>, id: i64, role: UserRole) -> Result<(), AppError> {
    sqlx::query("UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(role.as_str())
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
