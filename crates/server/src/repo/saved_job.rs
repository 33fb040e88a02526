use shared_types::{AppError, Job};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Flip the saved state of a job for a user. Returns the new state.
pub async fn toggle(pool: &Pool<Postgres>, user_id: i64, job_id: Uuid) -> Result<bool, AppError> {
    let removed = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
        .bind(user_id)
        .bind(job_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    if removed.rows_affected() > 0 {
        return Ok(false);
    }

    sqlx::query(
        "INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2)
         ON CONFLICT (user_id, job_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(job_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(true)
}

pub async fn is_saved(pool: &Pool<Postgres>, user_id: i64, job_id: Uuid) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM saved_jobs WHERE user_id = $1 AND job_id = $2)",
    )
    .bind(user_id)
    .bind(job_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Saved jobs, most recently saved first. Jobs that have since closed stay
/// listed so the user can unsave them.
pub async fn list(
    pool: &Pool<Postgres>,
    user_id: i64,
    page: i64,
    limit: i64,
) -> Result<(Vec<Job>, i64), AppError> {
    let offset = shared_types::page_offset(page, limit);

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM saved_jobs WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Job>(
        "SELECT j.id, j.employer_id, j.title, j.title_ar, j.description, j.description_ar,
                j.company_name, j.location, j.category, j.job_type, j.salary_min, j.salary_max,
                j.currency, j.is_remote, j.status, j.decline_reason, j.created_at, j.updated_at,
                j.approved_at
         FROM saved_jobs s JOIN jobs j ON j.id = s.job_id
         WHERE s.user_id = $1
         ORDER BY s.created_at DESC
         LIMIT $2 OFFSET $3",
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}
