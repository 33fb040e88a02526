//! Integration tests for the public REST surface.
//!
//! These tests require a running PostgreSQL database.
//! Run with: `cargo test -p server --features server --test api_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, post_json, send, test_app};
use shared_types::{ApiResponse, AppError, AppErrorKind, CategoryOption, JobResponse, JobStatus, PaginatedResponse};

#[tokio::test]
async fn health_check_returns_ok() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
    assert!(body.contains("\"db\":\"connected\""));
}

#[tokio::test]
async fn api_reference_is_served() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/docs", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/jobs"));
}

#[tokio::test]
async fn public_search_returns_paginated_envelope() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/api/jobs?page=1&limit=5", None).await;

    assert_eq!(status, StatusCode::OK);
    let resp: ApiResponse<PaginatedResponse<JobResponse>> = serde_json::from_str(&body).unwrap();
    assert!(resp.success);
    let page = resp.data.unwrap();
    assert_eq!(page.meta.page, 1);
    assert!(page.data.iter().all(|j| j.status == JobStatus::Active));
}

#[tokio::test]
async fn unknown_job_type_filter_is_rejected() {
    let (app, _) = test_app().await;
    let (status, body) = get(&app, "/api/jobs?job_type=gig", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[tokio::test]
async fn malformed_job_id_reads_as_not_found() {
    let (app, _) = test_app().await;
    let (status, _) = get(&app, "/api/jobs/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_follow_requested_language() {
    let (app, _) = test_app().await;

    let (status, body) = get(&app, "/api/jobs/categories?lang=ar", None).await;
    assert_eq!(status, StatusCode::OK);
    let ar: ApiResponse<Vec<CategoryOption>> = serde_json::from_str(&body).unwrap();

    let (_, body) = send(&app, "GET", "/api/jobs/categories", None, None, &[("x-lang", "en")]).await;
    let en: ApiResponse<Vec<CategoryOption>> = serde_json::from_str(&body).unwrap();

    let (ar, en) = (ar.data.unwrap(), en.data.unwrap());
    assert_eq!(ar.len(), en.len());
    assert_eq!(ar[0].slug, en[0].slug);
    assert_ne!(ar[0].label, en[0].label);
}

#[tokio::test]
async fn contact_form_accepts_valid_message() {
    let (app, _) = test_app().await;
    let json = serde_json::json!({
        "name": "Sara",
        "email": "sara@example.com",
        "subject": "Advertising",
        "message": "How do I feature a listing on the home page?"
    });
    let (status, body) = post_json(&app, "/api/contact", &json, None).await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body.contains("\"success\":true"));
}

#[tokio::test]
async fn contact_form_reports_field_errors() {
    let (app, _) = test_app().await;
    let json = serde_json::json!({
        "name": "",
        "email": "not-an-email",
        "subject": "Hi",
        "message": "x"
    });
    let (status, body) = post_json(&app, "/api/contact", &json, None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert!(err.field_errors.contains_key("email"));
}
