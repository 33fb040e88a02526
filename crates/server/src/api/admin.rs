use dioxus::prelude::*;
use shared_types::{
    AdminDashboard, AnalyticsData, ContactResponse, ContactSearchParams, ContactStatus,
    DeclineJobRequest, JobResponse, JobSearchParams, PaginatedResponse, User, UserSearchParams,
};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

#[cfg(feature = "server")]
use shared_types::UserRole;

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_dashboard() -> Result<AdminDashboard, ServerFnError> {
    require_role(UserRole::Admin)?;
    crate::repo::stats::admin_dashboard(get_db().await)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_analytics() -> Result<AnalyticsData, ServerFnError> {
    require_role(UserRole::Admin)?;
    crate::repo::stats::analytics(get_db().await)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Jobs in any status, filtered like the public search.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_list_jobs(
    params: JobSearchParams,
) -> Result<PaginatedResponse<JobResponse>, ServerFnError> {
    require_role(UserRole::Admin)?;
    crate::rest::jobs::search_page(get_db().await, &params, None, None)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_pending_jobs(
    params: JobSearchParams,
) -> Result<PaginatedResponse<JobResponse>, ServerFnError> {
    use shared_types::JobStatus;

    require_role(UserRole::Admin)?;
    crate::rest::jobs::search_page(get_db().await, &params, Some(JobStatus::Pending), None)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_approve_job(id: String) -> Result<JobResponse, ServerFnError> {
    use crate::rest::parse_id;
    use shared_types::JobStatus;

    let admin = require_role(UserRole::Admin)?;
    let id = parse_id(&id, "Job").map_err(|e| e.into_server_fn_error())?;
    let job = crate::repo::job::transition_checked(
        get_db().await,
        id,
        JobStatus::Pending,
        JobStatus::Active,
        None,
        None,
    )
    .await
    .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(job_id = %id, admin_id = admin.sub, "job approved");
    Ok(job.into())
}

/// Decline a pending job. The reason is required and shown to the employer.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn admin_decline_job(
    id: String,
    req: DeclineJobRequest,
) -> Result<JobResponse, ServerFnError> {
    use crate::rest::parse_id;
    use shared_types::JobStatus;

    let admin = require_role(UserRole::Admin)?;
    let id = parse_id(&id, "Job").map_err(|e| e.into_server_fn_error())?;
    let reason = req.validated_reason().map_err(|e| e.into_server_fn_error())?;
    let job = crate::repo::job::transition_checked(
        get_db().await,
        id,
        JobStatus::Pending,
        JobStatus::Declined,
        None,
        Some(&reason),
    )
    .await
    .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(job_id = %id, admin_id = admin.sub, "job declined");
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_close_job(id: String) -> Result<JobResponse, ServerFnError> {
    use crate::rest::parse_id;
    use shared_types::JobStatus;

    require_role(UserRole::Admin)?;
    let id = parse_id(&id, "Job").map_err(|e| e.into_server_fn_error())?;
    let job = crate::repo::job::transition_checked(
        get_db().await,
        id,
        JobStatus::Active,
        JobStatus::Closed,
        None,
        None,
    )
    .await
    .map_err(|e| e.into_server_fn_error())?;
    Ok(job.into())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_list_users(
    params: UserSearchParams,
) -> Result<PaginatedResponse<User>, ServerFnError> {
    require_role(UserRole::Admin)?;
    crate::rest::admin::users_page(get_db().await, &params)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Activate or deactivate an account. Deactivation revokes its refresh tokens.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_set_user_active(user_id: i64, is_active: bool) -> Result<User, ServerFnError> {
    let admin = require_role(UserRole::Admin)?;
    crate::rest::admin::set_user_active(get_db().await, admin.sub, user_id, is_active)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_list_contacts(
    params: ContactSearchParams,
) -> Result<PaginatedResponse<ContactResponse>, ServerFnError> {
    require_role(UserRole::Admin)?;
    crate::rest::admin::contacts_page(get_db().await, &params)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_update_contact_status(
    id: String,
    status: ContactStatus,
) -> Result<ContactResponse, ServerFnError> {
    use crate::rest::parse_id;

    require_role(UserRole::Admin)?;
    let id = parse_id(&id, "Message").map_err(|e| e.into_server_fn_error())?;
    crate::rest::admin::set_contact_status(get_db().await, id, status)
        .await
        .map_err(|e| e.into_server_fn_error())
}
