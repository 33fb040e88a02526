use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    normalize_pagination, t, ApiResponse, AppError, ApplicationResponse,
    ApplicationSearchParams, CandidateResponse, CompanyProfile, CreateJobRequest,
    EmployeeProfile, EmployerDashboard, Job, JobResponse, JobSearchParams, JobStatus, Msg,
    PaginatedResponse, UpdateApplicationStatusRequest, UpdateCompanyProfileRequest,
    UpdateJobRequest,
};

use super::jobs::search_page;
use super::{ok, ok_with, parse_id, ApiResult};
use crate::auth::extractors::EmployerOnly;
use crate::error_convert::ValidateRequest;
use crate::lang::RequestLang;
use crate::repo;

// ── Shared operations (REST and server functions) ───────────────────

pub(crate) async fn create(
    pool: &Pool<Postgres>,
    employer_id: i64,
    body: &CreateJobRequest,
) -> Result<Job, AppError> {
    body.validate_request()?;
    body.check_rules()?;
    let job = repo::job::create(pool, employer_id, body, body.initial_status()).await?;
    tracing::info!(job_id = %job.id, employer_id, status = %job.status, "job created");
    Ok(job)
}

/// Replace an editable job. Editing keeps the current status unless the
/// employer asks for review, which moves it to pending.
pub(crate) async fn update(
    pool: &Pool<Postgres>,
    employer_id: i64,
    id: Uuid,
    body: &UpdateJobRequest,
) -> Result<Job, AppError> {
    body.validate_request()?;
    body.check_rules()?;
    let current = owned(pool, id, employer_id).await?;
    let status = current.status();
    if !status.is_editable() {
        return Err(AppError::conflict(format!("A {} job can no longer be edited", status.as_str())));
    }
    let next = if body.submit_for_review { JobStatus::Pending } else { status };

    repo::job::update(pool, id, employer_id, body, next)
        .await?
        .ok_or_else(|| AppError::conflict("Job was changed by someone else, reload and retry"))
}

pub(crate) async fn remove(pool: &Pool<Postgres>, employer_id: i64, id: Uuid) -> Result<(), AppError> {
    let current = owned(pool, id, employer_id).await?;
    if !current.status().is_deletable() {
        return Err(AppError::conflict("Only draft or declined jobs can be deleted"));
    }
    if !repo::job::delete(pool, id, employer_id).await? {
        return Err(AppError::conflict("Job was changed by someone else, reload and retry"));
    }
    tracing::info!(job_id = %id, employer_id, "job deleted");
    Ok(())
}

/// Send a draft or declined job to moderation.
pub(crate) async fn submit(pool: &Pool<Postgres>, employer_id: i64, id: Uuid) -> Result<Job, AppError> {
    let from = owned(pool, id, employer_id).await?.status();
    from.transition(JobStatus::Pending)?;
    repo::job::transition_checked(pool, id, from, JobStatus::Pending, Some(employer_id), None).await
}

pub(crate) async fn close(pool: &Pool<Postgres>, employer_id: i64, id: Uuid) -> Result<Job, AppError> {
    repo::job::transition_checked(
        pool,
        id,
        JobStatus::Active,
        JobStatus::Closed,
        Some(employer_id),
        None,
    )
    .await
}

pub(crate) async fn owned(pool: &Pool<Postgres>, id: Uuid, employer_id: i64) -> Result<Job, AppError> {
    repo::job::find_owned(pool, id, employer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))
}

pub(crate) async fn candidate(
    pool: &Pool<Postgres>,
    employer_id: i64,
    application_id: Uuid,
) -> Result<CandidateResponse, AppError> {
    let application = repo::application::find_for_employer(pool, application_id, employer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;
    let profile = repo::profile::find(pool, application.employee_id)
        .await?
        .map(EmployeeProfile::from);
    Ok(CandidateResponse {
        application: application.into(),
        profile,
    })
}

/// The employer's company profile; before one is saved, a blank profile
/// named after the account.
pub(crate) async fn company(pool: &Pool<Postgres>, user_id: i64) -> Result<CompanyProfile, AppError> {
    if let Some(row) = repo::company::find(pool, user_id).await? {
        return Ok(row.into());
    }
    let user = repo::user::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(CompanyProfile {
        user_id,
        name: user.display_name,
        ..Default::default()
    })
}

pub(crate) async fn save_company(
    pool: &Pool<Postgres>,
    user_id: i64,
    body: &UpdateCompanyProfileRequest,
) -> Result<CompanyProfile, AppError> {
    body.validate_request()?;
    Ok(repo::company::upsert(pool, user_id, body).await?.into())
}

pub(crate) async fn applications_page(
    pool: &Pool<Postgres>,
    employer_id: i64,
    params: &ApplicationSearchParams,
) -> Result<PaginatedResponse<ApplicationResponse>, AppError> {
    let (status, job_id) = params.parsed()?;
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (rows, total) =
        repo::application::list_for_employer(pool, employer_id, status, job_id, page, limit).await?;
    Ok(PaginatedResponse::new(
        rows.into_iter().map(ApplicationResponse::from).collect(),
        page,
        limit,
        total,
    ))
}

// ── Dashboard ───────────────────────────────────────────────────────

/// GET /api/employer/dashboard
#[utoipa::path(
    get,
    path = "/api/employer/dashboard",
    responses(
        (status = 200, description = "Counters and recent applications", body = ApiResponse<EmployerDashboard>),
        (status = 403, description = "Employer role required", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn dashboard(
    State(pool): State<Pool<Postgres>>,
    employer: EmployerOnly,
) -> ApiResult<EmployerDashboard> {
    ok(repo::stats::employer_dashboard(&pool, employer.0.sub).await?)
}

// ── Jobs ────────────────────────────────────────────────────────────

/// GET /api/employer/jobs
#[utoipa::path(
    get,
    path = "/api/employer/jobs",
    params(JobSearchParams),
    responses(
        (status = 200, description = "The employer's jobs in any status", body = ApiResponse<PaginatedResponse<JobResponse>>)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn list_jobs(
    State(pool): State<Pool<Postgres>>,
    employer: EmployerOnly,
    Query(params): Query<JobSearchParams>,
) -> ApiResult<PaginatedResponse<JobResponse>> {
    ok(search_page(&pool, &params, None, Some(employer.0.sub)).await?)
}

/// POST /api/employer/jobs
#[utoipa::path(
    post,
    path = "/api/employer/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job saved as draft or sent for review", body = ApiResponse<JobResponse>),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer, body))]
pub async fn create_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Json(body): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JobResponse>>), AppError> {
    let job = create(&pool, employer.0.sub, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(JobResponse::from(job), t(lang, Msg::JobCreated))),
    ))
}

/// GET /api/employer/jobs/{id}
#[utoipa::path(
    get,
    path = "/api/employer/jobs/{id}",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job found", body = ApiResponse<JobResponse>),
        (status = 404, description = "Not one of the employer's jobs", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn get_job(
    State(pool): State<Pool<Postgres>>,
    employer: EmployerOnly,
    Path(id): Path<String>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    ok(owned(&pool, id, employer.0.sub).await?.into())
}

/// PUT /api/employer/jobs/{id}
#[utoipa::path(
    put,
    path = "/api/employer/jobs/{id}",
    params(("id" = String, Path, description = "Job UUID")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = ApiResponse<JobResponse>),
        (status = 404, description = "Not one of the employer's jobs", body = AppError),
        (status = 409, description = "Job is live or closed", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer, body))]
pub async fn update_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Path(id): Path<String>,
    Json(body): Json<UpdateJobRequest>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    let job = update(&pool, employer.0.sub, id, &body).await?;
    ok_with(job.into(), t(lang, Msg::JobUpdated))
}

/// DELETE /api/employer/jobs/{id}
#[utoipa::path(
    delete,
    path = "/api/employer/jobs/{id}",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job deleted", body = ApiResponse<String>),
        (status = 404, description = "Not one of the employer's jobs", body = AppError),
        (status = 409, description = "Only draft or declined jobs can be deleted", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn delete_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = parse_id(&id, "Job")?;
    remove(&pool, employer.0.sub, id).await?;
    Ok(Json(ApiResponse::message_only(t(lang, Msg::JobDeleted))))
}

/// POST /api/employer/jobs/{id}/submit
#[utoipa::path(
    post,
    path = "/api/employer/jobs/{id}/submit",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job sent for review", body = ApiResponse<JobResponse>),
        (status = 404, description = "Not one of the employer's jobs", body = AppError),
        (status = 409, description = "Only draft or declined jobs can be submitted", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn submit_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Path(id): Path<String>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    let job = submit(&pool, employer.0.sub, id).await?;
    ok_with(job.into(), t(lang, Msg::JobSubmitted))
}

/// POST /api/employer/jobs/{id}/close
#[utoipa::path(
    post,
    path = "/api/employer/jobs/{id}/close",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job closed", body = ApiResponse<JobResponse>),
        (status = 404, description = "Not one of the employer's jobs", body = AppError),
        (status = 409, description = "Job is not active", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn close_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Path(id): Path<String>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    let job = close(&pool, employer.0.sub, id).await?;
    ok_with(job.into(), t(lang, Msg::JobClosed))
}

// ── Applications ────────────────────────────────────────────────────

/// GET /api/employer/applications
#[utoipa::path(
    get,
    path = "/api/employer/applications",
    params(ApplicationSearchParams),
    responses(
        (status = 200, description = "Applications to the employer's jobs", body = ApiResponse<PaginatedResponse<ApplicationResponse>>),
        (status = 400, description = "Invalid filter", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn list_applications(
    State(pool): State<Pool<Postgres>>,
    employer: EmployerOnly,
    Query(params): Query<ApplicationSearchParams>,
) -> ApiResult<PaginatedResponse<ApplicationResponse>> {
    ok(applications_page(&pool, employer.0.sub, &params).await?)
}

/// GET /api/employer/applications/{id}/candidate
#[utoipa::path(
    get,
    path = "/api/employer/applications/{id}/candidate",
    params(("id" = String, Path, description = "Application UUID")),
    responses(
        (status = 200, description = "Application with the applicant's profile", body = ApiResponse<CandidateResponse>),
        (status = 404, description = "Application not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn get_candidate(
    State(pool): State<Pool<Postgres>>,
    employer: EmployerOnly,
    Path(id): Path<String>,
) -> ApiResult<CandidateResponse> {
    let id = parse_id(&id, "Application")?;
    ok(candidate(&pool, employer.0.sub, id).await?)
}

/// PATCH /api/employer/applications/{id}/status
#[utoipa::path(
    patch,
    path = "/api/employer/applications/{id}/status",
    params(("id" = String, Path, description = "Application UUID")),
    request_body = UpdateApplicationStatusRequest,
    responses(
        (status = 200, description = "Application moved", body = ApiResponse<ApplicationResponse>),
        (status = 404, description = "Application not found", body = AppError),
        (status = 409, description = "Transition not allowed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer, body), fields(to = %body.status.as_str()))]
pub async fn update_application_status(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Path(id): Path<String>,
    Json(body): Json<UpdateApplicationStatusRequest>,
) -> ApiResult<ApplicationResponse> {
    let id = parse_id(&id, "Application")?;
    let application =
        repo::application::advance(&pool, id, employer.0.sub, body.status, body.note.as_deref())
            .await?;
    ok_with(application.into(), t(lang, Msg::ApplicationUpdated))
}

// ── Company profile ─────────────────────────────────────────────────

/// GET /api/employer/company
#[utoipa::path(
    get,
    path = "/api/employer/company",
    responses(
        (status = 200, description = "Company profile", body = ApiResponse<CompanyProfile>)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer))]
pub async fn get_company(
    State(pool): State<Pool<Postgres>>,
    employer: EmployerOnly,
) -> ApiResult<CompanyProfile> {
    ok(company(&pool, employer.0.sub).await?)
}

/// PUT /api/employer/company
#[utoipa::path(
    put,
    path = "/api/employer/company",
    request_body = UpdateCompanyProfileRequest,
    responses(
        (status = 200, description = "Company profile saved", body = ApiResponse<CompanyProfile>),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employer"
)]
#[tracing::instrument(skip(pool, employer, body))]
pub async fn update_company(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employer: EmployerOnly,
    Json(body): Json<UpdateCompanyProfileRequest>,
) -> ApiResult<CompanyProfile> {
    let profile = save_company(&pool, employer.0.sub, &body).await?;
    ok_with(profile, t(lang, Msg::ProfileSaved))
}
