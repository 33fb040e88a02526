use shared_types::{AppError, CreateJobRequest, Job, JobSearchParams, JobStatus, JobType};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const JOB_COLUMNS: &str = "id, employer_id, title, title_ar, description, description_ar, \
     company_name, location, category, job_type, salary_min, salary_max, currency, is_remote, \
     status, decline_reason, created_at, updated_at, approved_at";

/// Typed job listing filter. Built from `JobSearchParams` by the handlers,
/// which then pin `status` / `employer_id` according to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
    pub remote: Option<bool>,
    pub employer_id: Option<i64>,
    /// Review queues read oldest first; listings newest first.
    pub oldest_first: bool,
}

impl JobQuery {
    pub fn from_params(params: &JobSearchParams) -> Result<Self, AppError> {
        params.check()?;
        let p = params.cleaned();
        Ok(Self {
            q: p.q,
            location: p.location,
            category: p.category,
            job_type: p.job_type.as_deref().and_then(JobType::parse),
            status: p.status.as_deref().and_then(JobStatus::parse),
            remote: p.remote,
            employer_id: p.employer_id,
            oldest_first: false,
        })
    }
}

const JOB_FILTER: &str = "($1::TEXT IS NULL OR title ILIKE $1 OR COALESCE(title_ar, '') ILIKE $1 \
         OR description ILIKE $1 OR company_name ILIKE $1)
     AND ($2::TEXT IS NULL OR location ILIKE $2)
     AND ($3::TEXT IS NULL OR category = $3)
     AND ($4::TEXT IS NULL OR job_type = $4)
     AND ($5::TEXT IS NULL OR status = $5)
     AND ($6::BOOLEAN IS NULL OR is_remote = $6)
     AND ($7::BIGINT IS NULL OR employer_id = $7)";

/// Filtered, paginated listing, newest first.
pub async fn search(
    pool: &Pool<Postgres>,
    query: &JobQuery,
    page: i64,
    limit: i64,
) -> Result<(Vec<Job>, i64), AppError> {
    let pattern = super::like_pattern(query.q.as_deref());
    let location = super::like_pattern(query.location.as_deref());
    let job_type = query.job_type.map(|t| t.as_str());
    let status = query.status.map(|s| s.as_str());
    let offset = shared_types::page_offset(page, limit);
    let order = if query.oldest_first {
        "created_at ASC, id"
    } else {
        "COALESCE(approved_at, created_at) DESC, id"
    };

    let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM jobs WHERE {JOB_FILTER}"))
        .bind(pattern.as_deref())
        .bind(location.as_deref())
        .bind(query.category.as_deref())
        .bind(job_type)
        .bind(status)
        .bind(query.remote)
        .bind(query.employer_id)
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let rows = sqlx::query_as::<_, Job>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE {JOB_FILTER}
         ORDER BY {order}
         LIMIT $8 OFFSET $9"
    ))
    .bind(pattern.as_deref())
    .bind(location.as_deref())
    .bind(query.category.as_deref())
    .bind(job_type)
    .bind(status)
    .bind(query.remote)
    .bind(query.employer_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok((rows, total))
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Job>, AppError> {
    sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Job owned by `employer_id`, or `None` (also for other employers' jobs).
pub async fn find_owned(
    pool: &Pool<Postgres>,
    id: Uuid,
    employer_id: i64,
) -> Result<Option<Job>, AppError> {
    sqlx::query_as::<_, Job>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND employer_id = $2"
    ))
    .bind(id)
    .bind(employer_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Latest active jobs, for the home page and employee recommendations.
pub async fn latest_active(pool: &Pool<Postgres>, limit: i64) -> Result<Vec<Job>, AppError> {
    sqlx::query_as::<_, Job>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE status = 'active'
         ORDER BY COALESCE(approved_at, created_at) DESC
         LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Newest jobs regardless of status, for the admin dashboard.
pub async fn recent(pool: &Pool<Postgres>, limit: i64) -> Result<Vec<Job>, AppError> {
    sqlx::query_as::<_, Job>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs ORDER BY created_at DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert a job. The company name comes from the employer's company
/// profile, falling back to their display name.
pub async fn create(
    pool: &Pool<Postgres>,
    employer_id: i64,
    req: &CreateJobRequest,
    status: JobStatus,
) -> Result<Job, AppError> {
    let sql = format!(
        "INSERT INTO jobs (employer_id, company_name, title, title_ar, description, description_ar,
                           location, category, job_type, salary_min, salary_max, currency,
                           is_remote, status)
         VALUES ($1,
                 COALESCE((SELECT name FROM company_profiles WHERE user_id = $1),
                          (SELECT display_name FROM users WHERE id = $1)),
                 $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
         RETURNING {JOB_COLUMNS}"
    );
    sqlx::query_as::<_, Job>(&sql)
        .bind(employer_id)
        .bind(req.title.trim())
        .bind(blank_to_none(req.title_ar.as_deref()))
        .bind(req.description.trim())
        .bind(blank_to_none(req.description_ar.as_deref()))
        .bind(req.location.trim())
        .bind(&req.category)
        .bind(req.job_type.as_str())
        .bind(req.salary_min)
        .bind(req.salary_max)
        .bind(req.currency.trim().to_uppercase())
        .bind(req.is_remote)
        .bind(status.as_str())
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Replace an editable job's content and set its status. Moving to
/// `pending` clears any previous decline reason. `None` when the job is not
/// the employer's or is no longer editable.
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    employer_id: i64,
    req: &CreateJobRequest,
    status: JobStatus,
) -> Result<Option<Job>, AppError> {
    let sql = format!(
        "UPDATE jobs SET
             title = $3, title_ar = $4, description = $5, description_ar = $6,
             location = $7, category = $8, job_type = $9, salary_min = $10, salary_max = $11,
             currency = $12, is_remote = $13, status = $14,
             decline_reason = CASE WHEN $14 = 'pending' THEN NULL ELSE decline_reason END,
             updated_at = NOW()
         WHERE id = $1 AND employer_id = $2 AND status IN ('draft', 'pending', 'declined')
         RETURNING {JOB_COLUMNS}"
    );
    sqlx::query_as::<_, Job>(&sql)
        .bind(id)
        .bind(employer_id)
        .bind(req.title.trim())
        .bind(blank_to_none(req.title_ar.as_deref()))
        .bind(req.description.trim())
        .bind(blank_to_none(req.description_ar.as_deref()))
        .bind(req.location.trim())
        .bind(&req.category)
        .bind(req.job_type.as_str())
        .bind(req.salary_min)
        .bind(req.salary_max)
        .bind(req.currency.trim().to_uppercase())
        .bind(req.is_remote)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Delete a draft or declined job. Returns true if a row was deleted.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid, employer_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query(
        "DELETE FROM jobs WHERE id = $1 AND employer_id = $2 AND status IN ('draft', 'declined')",
    )
    .bind(id)
    .bind(employer_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected() > 0)
}

/// Compare-and-set status change: only applies while the job is still in
/// `from` (and owned by `employer_id`, when given). `None` means another
/// writer got there first or the job does not exist.
pub async fn transition(
    pool: &Pool<Postgres>,
    id: Uuid,
    from: JobStatus,
    to: JobStatus,
    employer_id: Option<i64>,
    decline_reason: Option<&str>,
) -> Result<Option<Job>, AppError> {
    let sql = format!(
        "UPDATE jobs SET
             status = $3,
             decline_reason = $4,
             approved_at = CASE WHEN $3 = 'active' THEN NOW() ELSE approved_at END,
             updated_at = NOW()
         WHERE id = $1 AND status = $2 AND ($5::BIGINT IS NULL OR employer_id = $5)
         RETURNING {JOB_COLUMNS}"
    );
    sqlx::query_as::<_, Job>(&sql)
        .bind(id)
        .bind(from.as_str())
        .bind(to.as_str())
        .bind(decline_reason)
        .bind(employer_id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// `transition`, resolving a miss into 404 (no such job, or not the
/// employer's) or 409 (the job has moved on from `from`).
pub async fn transition_checked(
    pool: &Pool<Postgres>,
    id: Uuid,
    from: JobStatus,
    to: JobStatus,
    employer_id: Option<i64>,
    decline_reason: Option<&str>,
) -> Result<Job, AppError> {
    if let Some(job) = transition(pool, id, from, to, employer_id, decline_reason).await? {
        return Ok(job);
    }

    let current = match employer_id {
        Some(owner) => find_owned(pool, id, owner).await?,
        None => find_by_id(pool, id).await?,
    };
    match current {
        None => Err(AppError::not_found("Job not found")),
        Some(job) => Err(job
            .status()
            .transition(to)
            .err()
            .unwrap_or_else(|| AppError::conflict("Job was changed by someone else, reload and retry"))),
    }
}

fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_from_params_parses_vocabularies() {
        let params = JobSearchParams {
            q: Some("  engineer ".into()),
            job_type: Some("full-time".into()),
            status: Some("".into()),
            ..Default::default()
        };
        let query = JobQuery::from_params(&params).unwrap();
        assert_eq!(query.q.as_deref(), Some("engineer"));
        assert_eq!(query.job_type, Some(JobType::FullTime));
        assert_eq!(query.status, None);
    }

    #[test]
    fn query_from_params_carries_employer_filter() {
        let params = JobSearchParams {
            employer_id: Some(42),
            ..Default::default()
        };
        assert_eq!(JobQuery::from_params(&params).unwrap().employer_id, Some(42));
    }

    #[test]
    fn query_from_params_rejects_unknown_status() {
        let params = JobSearchParams {
            status: Some("archived".into()),
            ..Default::default()
        };
        assert!(JobQuery::from_params(&params).is_err());
    }

    #[test]
    fn blank_optional_text_is_dropped() {
        assert_eq!(blank_to_none(Some("  ")), None);
        assert_eq!(blank_to_none(Some(" مهندس ")), Some("مهندس"));
        assert_eq!(blank_to_none(None), None);
    }
}
