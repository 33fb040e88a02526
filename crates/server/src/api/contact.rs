use dioxus::prelude::*;
use shared_types::{ContactResponse, CreateContactRequest};

/// Public contact form. Throttled per client like the REST endpoint.
#[cfg_attr(feature = "server", tracing::instrument(skip_all, fields(email = %req.email)))]
#[server]
pub async fn submit_contact(req: CreateContactRequest) -> Result<ContactResponse, ServerFnError> {
    use super::auth::request_headers;
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use crate::rate_limit::check_server_fn;
    use crate::repo;

    check_server_fn(&request_headers(), "contact").map_err(|e| e.into_server_fn_error())?;
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let message = repo::contact::create(get_db().await, &req)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(contact_id = %message.id, "contact message received");
    Ok(message.into())
}
