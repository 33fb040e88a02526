use dioxus::prelude::*;
use shared_types::{JobResponse, JobSearchParams, PaginatedResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Jobs on the home page.
pub const LATEST_JOBS: i64 = 6;

/// Public job search over active listings.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_jobs(
    params: JobSearchParams,
) -> Result<PaginatedResponse<JobResponse>, ServerFnError> {
    use crate::rest::jobs::search_page;
    use shared_types::JobStatus;

    search_page(get_db().await, &params, Some(JobStatus::Active), None)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Job detail. Non-active jobs are only visible to admins and their owner.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_job(id: String) -> Result<JobResponse, ServerFnError> {
    use super::auth::current_claims;
    use crate::rest::{jobs::visible_job, parse_id};

    let id = parse_id(&id, "Job").map_err(|e| e.into_server_fn_error())?;
    visible_job(get_db().await, id, current_claims().as_ref())
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Newest active jobs for the home page.
#[server]
pub async fn latest_jobs() -> Result<Vec<JobResponse>, ServerFnError> {
    use crate::repo;

    let rows = repo::job::latest_active(get_db().await, LATEST_JOBS)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(rows.into_iter().map(JobResponse::from).collect())
}
