use axum::extract::{Path, Query, State};
use sqlx::{Pool, Postgres};

use shared_types::{
    category_options, normalize_pagination, ApiResponse, AppError, CategoryOption, JobResponse,
    JobSearchParams, JobStatus, PaginatedResponse, UserRole,
};
use uuid::Uuid;

use super::{ok, parse_id, ApiResult};
use crate::auth::extractors::MaybeAuth;
use crate::auth::jwt::Claims;
use crate::lang::RequestLang;
use crate::repo;
use crate::repo::job::JobQuery;

/// One page of jobs matching `params`, with `status` and `employer_id`
/// pinned by the caller when given. A pinned `pending` status is the review
/// queue and reads oldest first.
pub(crate) async fn search_page(
    pool: &Pool<Postgres>,
    params: &JobSearchParams,
    status: Option<JobStatus>,
    employer_id: Option<i64>,
) -> Result<PaginatedResponse<JobResponse>, AppError> {
    let mut query = JobQuery::from_params(params)?;
    if status.is_some() {
        query.status = status;
        query.oldest_first = status == Some(JobStatus::Pending);
    }
    if employer_id.is_some() {
        query.employer_id = employer_id;
    }
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (rows, total) = repo::job::search(pool, &query, page, limit).await?;
    Ok(PaginatedResponse::new(
        rows.into_iter().map(JobResponse::from).collect(),
        page,
        limit,
        total,
    ))
}

/// A job as `viewer` may see it: active jobs for everyone, any status for
/// admins and the owning employer. Hidden jobs read as missing.
pub(crate) async fn visible_job(
    pool: &Pool<Postgres>,
    id: Uuid,
    viewer: Option<&Claims>,
) -> Result<JobResponse, AppError> {
    let job = repo::job::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;

    let privileged =
        viewer.is_some_and(|c| c.user_role() == UserRole::Admin || c.sub == job.employer_id);
    if !job.status().is_public() && !privileged {
        return Err(AppError::not_found("Job not found"));
    }
    Ok(job.into())
}

/// GET /api/jobs
#[utoipa::path(
    get,
    path = "/api/jobs",
    params(JobSearchParams),
    responses(
        (status = 200, description = "Active jobs matching the filters", body = ApiResponse<PaginatedResponse<JobResponse>>),
        (status = 400, description = "Invalid filter", body = AppError)
    ),
    tag = "jobs"
)]
#[tracing::instrument(skip(pool))]
pub async fn search_jobs(
    State(pool): State<Pool<Postgres>>,
    Query(params): Query<JobSearchParams>,
) -> ApiResult<PaginatedResponse<JobResponse>> {
    ok(search_page(&pool, &params, Some(JobStatus::Active), None).await?)
}

/// GET /api/jobs/{id}
///
/// Anyone sees active jobs; admins and the owning employer also see the
/// listing in any other status.
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job found", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found", body = AppError)
    ),
    tag = "jobs"
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn get_job(
    State(pool): State<Pool<Postgres>>,
    MaybeAuth(auth): MaybeAuth,
    Path(id): Path<String>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    ok(visible_job(&pool, id, auth.as_ref()).await?)
}

/// GET /api/jobs/categories
#[utoipa::path(
    get,
    path = "/api/jobs/categories",
    params(("lang" = Option<String>, Query, description = "en or ar")),
    responses(
        (status = 200, description = "Categories labelled in the request language", body = ApiResponse<Vec<CategoryOption>>)
    ),
    tag = "jobs"
)]
pub async fn list_categories(RequestLang(lang): RequestLang) -> ApiResult<Vec<CategoryOption>> {
    ok(category_options(lang))
}
