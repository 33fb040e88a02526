use axum::{extract::State, http::StatusCode, Json};
use sqlx::{Pool, Postgres};

use shared_types::{t, ApiResponse, AppError, ContactResponse, CreateContactRequest, Msg};

use crate::error_convert::ValidateRequest;
use crate::lang::RequestLang;
use crate::repo;

/// POST /api/contact
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Message received", body = ApiResponse<ContactResponse>),
        (status = 422, description = "Validation failed", body = AppError),
        (status = 429, description = "Too many requests", body = AppError)
    ),
    tag = "contact"
)]
#[tracing::instrument(skip(pool, body), fields(email = %body.email))]
pub async fn submit_contact(
    State(pool): State<Pool<Postgres>>,
    RequestLang(lang): RequestLang,
    Json(body): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContactResponse>>), AppError> {
    body.validate_request()?;
    let message = repo::contact::create(&pool, &body).await?;
    tracing::info!(contact_id = %message.id, "contact message received");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            ContactResponse::from(message),
            t(lang, Msg::ContactReceived),
        )),
    ))
}
