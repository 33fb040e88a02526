//! Integration tests for authentication endpoints.
//!
//! These tests require a running PostgreSQL database.
//! Run with: `cargo test -p server --features server --test auth_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, post_json, register, register_token, send, test_app, unique_email};
use shared_types::{ApiResponse, AppError, AuthResponse, AuthUser, UserRole};

#[tokio::test]
async fn register_returns_tokens_and_cookies() {
    let (app, _) = test_app().await;
    let email = unique_email("reg");

    let (status, body) = register(&app, &email, "StrongPass123!", "employee").await;

    assert_eq!(status, StatusCode::CREATED);
    let resp: ApiResponse<AuthResponse> = serde_json::from_str(&body).unwrap();
    let session = resp.data.unwrap();
    assert_eq!(session.user.email, email);
    assert_eq!(session.user.role, UserRole::Employee);
    assert!(!session.access_token.is_empty());
}

#[tokio::test]
async fn register_rejects_admin_role() {
    let (app, _) = test_app().await;
    let (status, body) = register(&app, &unique_email("sneaky"), "StrongPass123!", "admin").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert!(err.field_errors.contains_key("role"));
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let (app, _) = test_app().await;
    let email = unique_email("dup");

    register(&app, &email, "StrongPass123!", "employer").await;
    let (status, _) = register(&app, &email.to_uppercase(), "StrongPass123!", "employer").await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (app, _) = test_app().await;
    let email = unique_email("login");
    register(&app, &email, "MyPass99!", "employee").await;

    let ok = serde_json::json!({ "email": email, "password": "MyPass99!" });
    let (status, _) = post_json(&app, "/api/auth/login", &ok, None).await;
    assert_eq!(status, StatusCode::OK);

    let bad = serde_json::json!({ "email": email, "password": "nope-nope" });
    let (status, body) = post_json(&app, "/api/auth/login", &bad, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
async fn me_requires_a_token() {
    let (app, _) = test_app().await;

    let (status, _) = get(&app, "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register_token(&app, "me", "employer").await;
    let (status, body) = get(&app, "/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let me: ApiResponse<AuthUser> = serde_json::from_str(&body).unwrap();
    assert_eq!(me.data.unwrap().role, UserRole::Employer);
}

#[tokio::test]
async fn refresh_token_is_single_use() {
    let (app, _) = test_app().await;
    let (_, body) = register(&app, &unique_email("refresh"), "StrongPass123!", "employee").await;
    let session: ApiResponse<AuthResponse> = serde_json::from_str(&body).unwrap();
    let refresh = session.data.unwrap().refresh_token;

    let json = serde_json::json!({ "refresh_token": refresh });
    let (status, _) = post_json(&app, "/api/auth/refresh", &json, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post_json(&app, "/api/auth/refresh", &json, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_cookies() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, "POST", "/api/auth/logout", None, None, &[("x-lang", "ar")]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"success\":true"));
}

#[tokio::test]
async fn dashboards_enforce_roles() {
    let (app, _) = test_app().await;
    let employee = register_token(&app, "role_emp", "employee").await;
    let employer = register_token(&app, "role_boss", "employer").await;

    let (status, _) = get(&app, "/api/employer/dashboard", Some(&employee)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&app, "/api/admin/dashboard", Some(&employer)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&app, "/api/employer/dashboard", Some(&employer)).await;
    assert_eq!(status, StatusCode::OK);
}
