use shared_types::{AppError, Application, ApplicationStatus};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Application columns joined with the job title and applicant identity.
/// Expects the application aliased as `a`.
const APPLICATION_SELECT: &str = "SELECT a.id, a.job_id, a.employee_id, a.status, a.cover_letter,
            a.resume_url, a.employer_note, a.created_at, a.updated_at,
            j.title AS job_title, j.title_ar AS job_title_ar, j.company_name,
            u.display_name AS applicant_name, u.email AS applicant_email";

const APPLICATION_JOINS: &str = "JOIN jobs j ON j.id = a.job_id JOIN users u ON u.id = a.employee_id";

/// Insert an application. Applying twice to the same job trips the unique
/// constraint and surfaces as a 409.
pub async fn create(
    pool: &Pool<Postgres>,
    job_id: Uuid,
    employee_id: i64,
    cover_letter: Option<&str>,
    resume_url: Option<&str>,
) -> Result<Application, AppError> {
    let sql = format!(
        "WITH a AS (
             INSERT INTO applications (job_id, employee_id, cover_letter, resume_url)
             VALUES ($1, $2, $3, $4)
             RETURNING *
         )
         {APPLICATION_SELECT} FROM a {APPLICATION_JOINS}"
    );
    sqlx::query_as::<_, Application>(&sql)
        .bind(job_id)
        .bind(employee_id)
        .bind(cover_letter)
        .bind(resume_url)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Application on one of `employer_id`'s jobs.
pub async fn find_for_employer(
    pool: &Pool<Postgres>,
    id: Uuid,
    employer_id: i64,
) -> Result<Option<Application>, AppError> {
    let sql = format!(
        "{APPLICATION_SELECT} FROM applications a {APPLICATION_JOINS}
         WHERE a.id = $1 AND j.employer_id = $2"
    );
    sqlx::query_as::<_, Application>(&sql)
        .bind(id)
        .bind(employer_id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// An employee's own applications, newest first.
pub async fn list_for_employee(
    pool: &Pool<Postgres>,
    employee_id: i64,
    status: Option<ApplicationStatus>,
    page: i64,
    limit: i64,
) -> Result<(Vec<Application>, i64), AppError> {
    let status = status.map(|s| s.as_str());
    let offset = shared_types::page_offset(page, limit);

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM applications a
         WHERE a.employee_id = $1 AND ($2::TEXT IS NULL OR a.status = $2)",
    )
    .bind(employee_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Application>(&format!(
        "{APPLICATION_SELECT} FROM applications a {APPLICATION_JOINS}
         WHERE a.employee_id = $1 AND ($2::TEXT IS NULL OR a.status = $2)
         ORDER BY a.created_at DESC
         LIMIT $3 OFFSET $4"
    ))
    .bind(employee_id)
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

/// Applications across an employer's jobs, optionally narrowed to one job.
pub async fn list_for_employer(
    pool: &Pool<Postgres>,
    employer_id: i64,
    status: Option<ApplicationStatus>,
    job_id: Option<Uuid>,
    page: i64,
    limit: i64,
) -> Result<(Vec<Application>, i64), AppError> {
    let status = status.map(|s| s.as_str());
    let offset = shared_types::page_offset(page, limit);
    let filter = "j.employer_id = $1
                  AND ($2::TEXT IS NULL OR a.status = $2)
                  AND ($3::UUID IS NULL OR a.job_id = $3)";

    let total = sqlx::query_scalar::<_, i64>(&format!(
        "SELECT COUNT(*) FROM applications a JOIN jobs j ON j.id = a.job_id WHERE {filter}"
    ))
    .bind(employer_id)
    .bind(status)
    .bind(job_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Application>(&format!(
        "{APPLICATION_SELECT} FROM applications a {APPLICATION_JOINS}
         WHERE {filter}
         ORDER BY a.created_at DESC
         LIMIT $4 OFFSET $5"
    ))
    .bind(employer_id)
    .bind(status)
    .bind(job_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

/// Compare-and-set status change on one of `employer_id`'s applications.
/// `None` when the application moved on concurrently.
pub async fn update_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    employer_id: i64,
    from: ApplicationStatus,
    to: ApplicationStatus,
    note: Option<&str>,
) -> Result<Option<Application>, AppError> {
    let sql = format!(
        "WITH a AS (
             UPDATE applications SET
                 status = $4,
                 employer_note = COALESCE($5, employer_note),
                 updated_at = NOW()
             WHERE id = $1 AND status = $3
               AND job_id IN (SELECT id FROM jobs WHERE employer_id = $2)
             RETURNING *
         )
         {APPLICATION_SELECT} FROM a {APPLICATION_JOINS}"
    );
    sqlx::query_as::<_, Application>(&sql)
        .bind(id)
        .bind(employer_id)
        .bind(from.as_str())
        .bind(to.as_str())
        .bind(note)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Move one of `employer_id`'s applications to `to`, enforcing the
/// forward-only pipeline against the stored status.
pub async fn advance(
    pool: &Pool<Postgres>,
    id: Uuid,
    employer_id: i64,
    to: ApplicationStatus,
    note: Option<&str>,
) -> Result<Application, AppError> {
    let current = find_for_employer(pool, id, employer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;
    let from = current.status();
    from.transition(to)?;

    let note = note.map(str::trim).filter(|n| !n.is_empty());
    update_status(pool, id, employer_id, from, to, note)
        .await?
        .ok_or_else(|| AppError::conflict("Application was updated by someone else, reload and retry"))
}

/// Status of an employee's own application, if it exists.
pub async fn status_for_employee(
    pool: &Pool<Postgres>,
    id: Uuid,
    employee_id: i64,
) -> Result<Option<ApplicationStatus>, AppError> {
    let status = sqlx::query_scalar::<_, String>(
        "SELECT status FROM applications WHERE id = $1 AND employee_id = $2",
    )
    .bind(id)
    .bind(employee_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(status.map(|s| ApplicationStatus::parse(&s).unwrap_or_default()))
}

/// Withdraw (delete) an application still in `pending` or `reviewing`.
pub async fn withdraw(pool: &Pool<Postgres>, id: Uuid, employee_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        "DELETE FROM applications
         WHERE id = $1 AND employee_id = $2 AND status IN ('pending', 'reviewing')",
    )
    .bind(id)
    .bind(employee_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected() > 0)
}

/// Whether `employee_id` has applied to `job_id`.
pub async fn has_applied(
    pool: &Pool<Postgres>,
    job_id: Uuid,
    employee_id: i64,
) -> Result<bool, AppError> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM applications WHERE job_id = $1 AND employee_id = $2)",
    )
    .bind(job_id)
    .bind(employee_id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
