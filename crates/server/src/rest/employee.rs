use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    normalize_pagination, t, ApiResponse, AppError, Application, ApplicationResponse,
    ApplicationSearchParams, EmployeeDashboard, EmployeeProfile, JobResponse, Msg,
    PaginatedResponse, PaginationParams, SavedToggle, SubmitApplicationRequest,
    UpdateEmployeeProfileRequest,
};

use super::{ok, ok_with, parse_id, ApiResult};
use crate::auth::extractors::EmployeeOnly;
use crate::error_convert::ValidateRequest;
use crate::lang::RequestLang;
use crate::repo;

// ── Shared operations (REST and server functions) ───────────────────

/// Apply to an active job. A second application to the same job is a 409.
pub(crate) async fn apply_to_job(
    pool: &Pool<Postgres>,
    employee_id: i64,
    body: &SubmitApplicationRequest,
) -> Result<Application, AppError> {
    body.validate_request()?;
    let job_id = Uuid::parse_str(body.job_id.trim())
        .map_err(|_| AppError::not_found("Job not found"))?;
    let job = repo::job::find_by_id(pool, job_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))?;
    if !job.status().is_public() {
        return Err(AppError::conflict("This job is no longer accepting applications"));
    }

    let cover_letter = body.cover_letter.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let resume_url = body.resume_url.as_deref().map(str::trim).filter(|r| !r.is_empty());
    let application =
        repo::application::create(pool, job_id, employee_id, cover_letter, resume_url).await?;
    tracing::info!(application_id = %application.id, %job_id, employee_id, "application submitted");
    Ok(application)
}

/// Withdraw an application still in pending or reviewing. The row is
/// removed, so the employee may apply again later.
pub(crate) async fn withdraw(pool: &Pool<Postgres>, employee_id: i64, id: Uuid) -> Result<(), AppError> {
    let status = repo::application::status_for_employee(pool, id, employee_id)
        .await?
        .ok_or_else(|| AppError::not_found("Application not found"))?;
    if !status.is_withdrawable() {
        return Err(AppError::conflict(format!(
            "A {} application can no longer be withdrawn",
            status.as_str()
        )));
    }
    if !repo::application::withdraw(pool, id, employee_id).await? {
        return Err(AppError::conflict("Application was updated by the employer, reload and retry"));
    }
    Ok(())
}

pub(crate) async fn applications_page(
    pool: &Pool<Postgres>,
    employee_id: i64,
    params: &ApplicationSearchParams,
) -> Result<PaginatedResponse<ApplicationResponse>, AppError> {
    let (status, _) = params.parsed()?;
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (rows, total) =
        repo::application::list_for_employee(pool, employee_id, status, page, limit).await?;
    Ok(PaginatedResponse::new(
        rows.into_iter().map(ApplicationResponse::from).collect(),
        page,
        limit,
        total,
    ))
}

pub(crate) async fn saved_jobs_page(
    pool: &Pool<Postgres>,
    employee_id: i64,
    params: &PaginationParams,
) -> Result<PaginatedResponse<JobResponse>, AppError> {
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (rows, total) = repo::saved_job::list(pool, employee_id, page, limit).await?;
    Ok(PaginatedResponse::new(
        rows.into_iter().map(JobResponse::from).collect(),
        page,
        limit,
        total,
    ))
}

pub(crate) async fn profile(pool: &Pool<Postgres>, user_id: i64) -> Result<EmployeeProfile, AppError> {
    if let Some(row) = repo::profile::find(pool, user_id).await? {
        return Ok(row.into());
    }
    let user = repo::user::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(EmployeeProfile {
        user_id,
        full_name: user.display_name,
        ..Default::default()
    })
}

pub(crate) async fn save_profile(
    pool: &Pool<Postgres>,
    user_id: i64,
    body: &UpdateEmployeeProfileRequest,
) -> Result<EmployeeProfile, AppError> {
    body.validate_request()?;
    Ok(repo::profile::upsert(pool, user_id, body).await?.into())
}

// ── Dashboard ───────────────────────────────────────────────────────

/// GET /api/employee/dashboard
#[utoipa::path(
    get,
    path = "/api/employee/dashboard",
    responses(
        (status = 200, description = "Counters, recent applications and recommended jobs", body = ApiResponse<EmployeeDashboard>),
        (status = 403, description = "Employee role required", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee))]
pub async fn dashboard(
    State(pool): State<Pool<Postgres>>,
    employee: EmployeeOnly,
) -> ApiResult<EmployeeDashboard> {
    ok(repo::stats::employee_dashboard(&pool, employee.0.sub).await?)
}

// ── Applications ────────────────────────────────────────────────────

/// GET /api/employee/applications
#[utoipa::path(
    get,
    path = "/api/employee/applications",
    params(ApplicationSearchParams),
    responses(
        (status = 200, description = "The employee's applications", body = ApiResponse<PaginatedResponse<ApplicationResponse>>),
        (status = 400, description = "Invalid filter", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee))]
pub async fn list_applications(
    State(pool): State<Pool<Postgres>>,
    employee: EmployeeOnly,
    Query(params): Query<ApplicationSearchParams>,
) -> ApiResult<PaginatedResponse<ApplicationResponse>> {
    ok(applications_page(&pool, employee.0.sub, &params).await?)
}

/// POST /api/employee/applications
#[utoipa::path(
    post,
    path = "/api/employee/applications",
    request_body = SubmitApplicationRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApiResponse<ApplicationResponse>),
        (status = 404, description = "Job not found", body = AppError),
        (status = 409, description = "Already applied, or job closed", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee, body), fields(job_id = %body.job_id))]
pub async fn apply(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employee: EmployeeOnly,
    Json(body): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationResponse>>), AppError> {
    let application = apply_to_job(&pool, employee.0.sub, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            ApplicationResponse::from(application),
            t(lang, Msg::ApplicationSubmitted),
        )),
    ))
}

/// DELETE /api/employee/applications/{id}
#[utoipa::path(
    delete,
    path = "/api/employee/applications/{id}",
    params(("id" = String, Path, description = "Application UUID")),
    responses(
        (status = 200, description = "Application withdrawn", body = ApiResponse<String>),
        (status = 404, description = "Application not found", body = AppError),
        (status = 409, description = "Application is past review", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee))]
pub async fn withdraw_application(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employee: EmployeeOnly,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = parse_id(&id, "Application")?;
    withdraw(&pool, employee.0.sub, id).await?;
    Ok(Json(ApiResponse::message_only(t(lang, Msg::ApplicationWithdrawn))))
}

// ── Saved jobs ──────────────────────────────────────────────────────

/// GET /api/employee/saved-jobs
#[utoipa::path(
    get,
    path = "/api/employee/saved-jobs",
    params(PaginationParams),
    responses(
        (status = 200, description = "Saved jobs, most recently saved first", body = ApiResponse<PaginatedResponse<JobResponse>>)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee))]
pub async fn list_saved_jobs(
    State(pool): State<Pool<Postgres>>,
    employee: EmployeeOnly,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<JobResponse>> {
    ok(saved_jobs_page(&pool, employee.0.sub, &params).await?)
}

/// POST /api/employee/saved-jobs/{job_id}/toggle
#[utoipa::path(
    post,
    path = "/api/employee/saved-jobs/{job_id}/toggle",
    params(("job_id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "New saved state", body = ApiResponse<SavedToggle>),
        (status = 404, description = "Job not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee))]
pub async fn toggle_saved_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employee: EmployeeOnly,
    Path(job_id): Path<String>,
) -> ApiResult<SavedToggle> {
    let job_id = parse_id(&job_id, "Job")?;
    let saved = repo::saved_job::toggle(&pool, employee.0.sub, job_id).await?;
    let message = if saved { Msg::JobSaved } else { Msg::JobUnsaved };
    ok_with(SavedToggle { saved }, t(lang, message))
}

// ── Profile ─────────────────────────────────────────────────────────

/// GET /api/employee/profile
#[utoipa::path(
    get,
    path = "/api/employee/profile",
    responses(
        (status = 200, description = "Job seeker profile", body = ApiResponse<EmployeeProfile>)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee))]
pub async fn get_profile(
    State(pool): State<Pool<Postgres>>,
    employee: EmployeeOnly,
) -> ApiResult<EmployeeProfile> {
    ok(profile(&pool, employee.0.sub).await?)
}

/// PUT /api/employee/profile
#[utoipa::path(
    put,
    path = "/api/employee/profile",
    request_body = UpdateEmployeeProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = ApiResponse<EmployeeProfile>),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "employee"
)]
#[tracing::instrument(skip(pool, employee, body))]
pub async fn update_profile(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    employee: EmployeeOnly,
    Json(body): Json<UpdateEmployeeProfileRequest>,
) -> ApiResult<EmployeeProfile> {
    let profile = save_profile(&pool, employee.0.sub, &body).await?;
    ok_with(profile, t(lang, Msg::ProfileSaved))
}
