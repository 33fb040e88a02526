use shared_types::{AppError, ContactMessage, ContactStatus, CreateContactRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, status, created_at, updated_at";

pub async fn create(
    pool: &Pool<Postgres>,
    req: &CreateContactRequest,
) -> Result<ContactMessage, AppError> {
    sqlx::query_as::<_, ContactMessage>(&format!(
        "INSERT INTO contacts (name, email, subject, message)
         VALUES ($1, $2, $3, $4)
         RETURNING {CONTACT_COLUMNS}"
    ))
    .bind(req.name.trim())
    .bind(req.email.trim())
    .bind(req.subject.trim())
    .bind(req.message.trim())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn list(
    pool: &Pool<Postgres>,
    status: Option<ContactStatus>,
    page: i64,
    limit: i64,
) -> Result<(Vec<ContactMessage>, i64), AppError> {
    let status = status.map(|s| s.as_str());
    let offset = shared_types::page_offset(page, limit);

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM contacts WHERE ($1::TEXT IS NULL OR status = $1)",
    )
    .bind(status)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {CONTACT_COLUMNS} FROM contacts
         WHERE ($1::TEXT IS NULL OR status = $1)
         ORDER BY created_at DESC
         LIMIT $2 OFFSET $3"
    ))
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

pub async fn update_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: ContactStatus,
) -> Result<Option<ContactMessage>, AppError> {
    sqlx::query_as::<_, ContactMessage>(&format!(
        "UPDATE contacts SET status = $2, updated_at = NOW()
         WHERE id = $1
         RETURNING {CONTACT_COLUMNS}"
    ))
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
