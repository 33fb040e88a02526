use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{self, get, request, PASSWORD};

#[tokio::test]
async fn login_ignores_email_case() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let user = common::register(&app, "huda@test.com", "employee").await;

    let (status, me) = get(&app, "/api/auth/me", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["email"], "huda@test.com");
    assert_eq!(me["data"]["role"], "employee");

    let (status, resp) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "HUDA@test.com", "password": PASSWORD })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{resp}");
    assert_eq!(resp["data"]["user"]["id"], user.id);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    common::register(&app, "real@test.com", "employee").await;

    let (s1, wrong) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "real@test.com", "password": "not-the-password" })),
        None,
    )
    .await;
    let (s2, unknown) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "ghost@test.com", "password": "not-the-password" })),
        None,
    )
    .await;
    assert_eq!(s1, StatusCode::UNAUTHORIZED);
    assert_eq!(s2, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong["message"], unknown["message"]);
}

#[tokio::test]
async fn logout_revokes_refresh_and_speaks_the_callers_language() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let (_, signup) = request(
        &app,
        "POST",
        "/api/auth/register",
        Some(json!({
            "email": "bye@test.com",
            "password": PASSWORD,
            "display_name": "Bye",
            "role": "employer",
        })),
        None,
    )
    .await;
    let refresh = signup["data"]["refresh_token"].as_str().unwrap().to_string();

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .header("content-type", "application/json")
        .header("cookie", "lang=ar")
        .body(Body::from(json!({ "refresh_token": refresh }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cleared: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect();
    assert!(cleared.iter().all(|c| c.contains("Max-Age=0")), "{cleared:?}");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "تم تسجيل الخروج");

    let (status, _) = request(
        &app,
        "POST",
        "/api/auth/refresh",
        Some(json!({ "refresh_token": refresh })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_cookie_authenticates_without_bearer() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "email": "browser@test.com",
                "password": PASSWORD,
                "display_name": "Browser",
                "role": "employee",
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie_header = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ");

    let req = Request::builder()
        .uri("/api/auth/me")
        .header("cookie", cookie_header)
        .body(Body::empty())
        .unwrap();
    let (status, me) = common::send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{me}");
    assert_eq!(me["data"]["email"], "browser@test.com");
}
