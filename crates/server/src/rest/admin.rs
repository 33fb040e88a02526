use axum::{
    extract::{Path, Query, State},
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{
    normalize_pagination, t, AdminDashboard, AnalyticsData, ApiResponse, AppError,
    ContactResponse, ContactSearchParams, ContactStatus, DeclineJobRequest, JobResponse,
    JobSearchParams, JobStatus, Msg, PaginatedResponse, UpdateContactStatusRequest,
    UpdateUserStatusRequest, User, UserRole, UserSearchParams,
};

use super::jobs::search_page;
use super::{ok, ok_with, parse_id, ApiResult};
use crate::auth::extractors::AdminOnly;
use crate::lang::RequestLang;
use crate::repo;

// ── Dashboard ───────────────────────────────────────────────────────

/// GET /api/admin/dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Site-wide counters and recent jobs", body = ApiResponse<AdminDashboard>),
        (status = 403, description = "Admin role required", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn dashboard(
    State(pool): State<Pool<Postgres>>,
    _admin: AdminOnly,
) -> ApiResult<AdminDashboard> {
    ok(repo::stats::admin_dashboard(&pool).await?)
}

/// GET /api/admin/analytics
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    responses(
        (status = 200, description = "Grouped counts for the analytics charts", body = ApiResponse<AnalyticsData>),
        (status = 403, description = "Admin role required", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn analytics(
    State(pool): State<Pool<Postgres>>,
    _admin: AdminOnly,
) -> ApiResult<AnalyticsData> {
    ok(repo::stats::analytics(&pool).await?)
}

// ── Job moderation ──────────────────────────────────────────────────

/// GET /api/admin/jobs
#[utoipa::path(
    get,
    path = "/api/admin/jobs",
    params(JobSearchParams),
    responses(
        (status = 200, description = "Jobs in any status", body = ApiResponse<PaginatedResponse<JobResponse>>),
        (status = 400, description = "Invalid filter", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn list_jobs(
    State(pool): State<Pool<Postgres>>,
    _admin: AdminOnly,
    Query(params): Query<JobSearchParams>,
) -> ApiResult<PaginatedResponse<JobResponse>> {
    ok(search_page(&pool, &params, None, None).await?)
}

/// GET /api/admin/jobs/pending
#[utoipa::path(
    get,
    path = "/api/admin/jobs/pending",
    params(JobSearchParams),
    responses(
        (status = 200, description = "Jobs awaiting moderation", body = ApiResponse<PaginatedResponse<JobResponse>>)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn pending_jobs(
    State(pool): State<Pool<Postgres>>,
    _admin: AdminOnly,
    Query(params): Query<JobSearchParams>,
) -> ApiResult<PaginatedResponse<JobResponse>> {
    ok(search_page(&pool, &params, Some(JobStatus::Pending), None).await?)
}

/// POST /api/admin/jobs/{id}/approve
#[utoipa::path(
    post,
    path = "/api/admin/jobs/{id}/approve",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job is live", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found", body = AppError),
        (status = 409, description = "Job is not pending", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, admin))]
pub async fn approve_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    admin: AdminOnly,
    Path(id): Path<String>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    let job = repo::job::transition_checked(&pool, id, JobStatus::Pending, JobStatus::Active, None, None)
        .await?;
    tracing::info!(job_id = %id, admin_id = admin.0.sub, "job approved");
    ok_with(JobResponse::from(job), t(lang, Msg::JobApproved))
}

/// POST /api/admin/jobs/{id}/decline
#[utoipa::path(
    post,
    path = "/api/admin/jobs/{id}/decline",
    params(("id" = String, Path, description = "Job UUID")),
    request_body = DeclineJobRequest,
    responses(
        (status = 200, description = "Job declined", body = ApiResponse<JobResponse>),
        (status = 400, description = "Reason missing or too long", body = AppError),
        (status = 404, description = "Job not found", body = AppError),
        (status = 409, description = "Job is not pending", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, admin, body))]
pub async fn decline_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    admin: AdminOnly,
    Path(id): Path<String>,
    Json(body): Json<DeclineJobRequest>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    let reason = body.validated_reason()?;
    let job = repo::job::transition_checked(
        &pool,
        id,
        JobStatus::Pending,
        JobStatus::Declined,
        None,
        Some(&reason),
    )
    .await?;
    tracing::info!(job_id = %id, admin_id = admin.0.sub, "job declined");
    ok_with(JobResponse::from(job), t(lang, Msg::JobDeclined))
}

/// POST /api/admin/jobs/{id}/close
#[utoipa::path(
    post,
    path = "/api/admin/jobs/{id}/close",
    params(("id" = String, Path, description = "Job UUID")),
    responses(
        (status = 200, description = "Job closed", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found", body = AppError),
        (status = 409, description = "Job is not active", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn close_job(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    _admin: AdminOnly,
    Path(id): Path<String>,
) -> ApiResult<JobResponse> {
    let id = parse_id(&id, "Job")?;
    let job = repo::job::transition_checked(&pool, id, JobStatus::Active, JobStatus::Closed, None, None)
        .await?;
    ok_with(JobResponse::from(job), t(lang, Msg::JobClosed))
}

// ── Users ───────────────────────────────────────────────────────────

/// GET /api/admin/users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(UserSearchParams),
    responses(
        (status = 200, description = "Users matching the search", body = ApiResponse<PaginatedResponse<User>>),
        (status = 400, description = "Unknown role", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn list_users(
    State(pool): State<Pool<Postgres>>,
    _admin: AdminOnly,
    Query(params): Query<UserSearchParams>,
) -> ApiResult<PaginatedResponse<User>> {
    ok(users_page(&pool, &params).await?)
}

pub(crate) async fn users_page(
    pool: &Pool<Postgres>,
    params: &UserSearchParams,
) -> Result<PaginatedResponse<User>, AppError> {
    let role = parse_role_filter(params.role.as_deref())?;
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (users, total) =
        repo::user::search(pool, params.q.as_deref(), role.map(|r| r.as_str()), page, limit).await?;
    Ok(PaginatedResponse::new(users, page, limit, total))
}

pub(crate) fn parse_role_filter(raw: Option<&str>) -> Result<Option<UserRole>, AppError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(r) => match UserRole::from_str_or_default(r) {
            UserRole::Public => Err(AppError::bad_request(format!("Unknown role: {r}"))),
            role => Ok(Some(role)),
        },
    }
}

/// PATCH /api/admin/users/{id}/status
///
/// Deactivating an account also revokes its refresh tokens, so the user is
/// signed out once their access token lapses.
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserStatusRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<User>),
        (status = 400, description = "Admins cannot deactivate themselves", body = AppError),
        (status = 404, description = "User not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, admin, body))]
pub async fn update_user_status(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    admin: AdminOnly,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUserStatusRequest>,
) -> ApiResult<User> {
    let user = set_user_active(&pool, admin.0.sub, id, body.is_active).await?;
    ok_with(user, t(lang, Msg::UserUpdated))
}

/// Shared with the server functions.
pub(crate) async fn set_user_active(
    pool: &Pool<Postgres>,
    admin_id: i64,
    user_id: i64,
    is_active: bool,
) -> Result<User, AppError> {
    if admin_id == user_id && !is_active {
        return Err(AppError::bad_request("You cannot deactivate your own account"));
    }
    let user = repo::user::set_active(pool, user_id, is_active)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    if !is_active {
        repo::refresh_token::revoke_all_for_user(pool, user_id).await?;
    }
    tracing::info!(user_id, is_active, admin_id, "user status changed");
    Ok(user)
}

// ── Contacts ────────────────────────────────────────────────────────

/// GET /api/admin/contacts
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    params(ContactSearchParams),
    responses(
        (status = 200, description = "Contact messages, newest first", body = ApiResponse<PaginatedResponse<ContactResponse>>),
        (status = 400, description = "Unknown status", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin))]
pub async fn list_contacts(
    State(pool): State<Pool<Postgres>>,
    _admin: AdminOnly,
    Query(params): Query<ContactSearchParams>,
) -> ApiResult<PaginatedResponse<ContactResponse>> {
    ok(contacts_page(&pool, &params).await?)
}

pub(crate) async fn contacts_page(
    pool: &Pool<Postgres>,
    params: &ContactSearchParams,
) -> Result<PaginatedResponse<ContactResponse>, AppError> {
    let status = match params.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => Some(
            ContactStatus::parse(s)
                .ok_or_else(|| AppError::bad_request(format!("Unknown contact status: {s}")))?,
        ),
    };
    let (page, limit) = normalize_pagination(params.page, params.limit);
    let (rows, total) = repo::contact::list(pool, status, page, limit).await?;
    Ok(PaginatedResponse::new(
        rows.into_iter().map(ContactResponse::from).collect(),
        page,
        limit,
        total,
    ))
}

/// PATCH /api/admin/contacts/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/contacts/{id}/status",
    params(("id" = String, Path, description = "Contact message UUID")),
    request_body = UpdateContactStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ContactResponse>),
        (status = 404, description = "Message not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[tracing::instrument(skip(pool, _admin, body))]
pub async fn update_contact_status(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    _admin: AdminOnly,
    Path(id): Path<String>,
    Json(body): Json<UpdateContactStatusRequest>,
) -> ApiResult<ContactResponse> {
    let id = parse_id(&id, "Message")?;
    let message = set_contact_status(&pool, id, body.status).await?;
    ok_with(message, t(lang, Msg::ContactUpdated))
}

pub(crate) async fn set_contact_status(
    pool: &Pool<Postgres>,
    id: uuid::Uuid,
    status: ContactStatus,
) -> Result<ContactResponse, AppError> {
    repo::contact::update_status(pool, id, status)
        .await?
        .map(ContactResponse::from)
        .ok_or_else(|| AppError::not_found("Message not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filter_accepts_known_roles_only() {
        assert_eq!(parse_role_filter(None).unwrap(), None);
        assert_eq!(parse_role_filter(Some("  ")).unwrap(), None);
        assert_eq!(parse_role_filter(Some("employer")).unwrap(), Some(UserRole::Employer));
        assert!(parse_role_filter(Some("superuser")).is_err());
    }
}
