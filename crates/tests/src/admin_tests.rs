use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{self, get, request};

#[tokio::test]
async fn admin_routes_reject_other_roles() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employee = common::register(&app, "nosy@test.com", "employee").await;

    let (status, _) = get(&app, "/api/admin/users", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = get(&app, "/api/admin/users", Some(&employee.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "Forbidden");
}

#[tokio::test]
async fn list_users_filters_by_role_and_search() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let admin = common::admin(&pool).await;
    common::register(&app, "maha@test.com", "employee").await;
    common::register(&app, "omar@test.com", "employee").await;
    common::register(&app, "corp@test.com", "employer").await;

    let (_, employees) = get(&app, "/api/admin/users?role=employee", Some(&admin.token)).await;
    assert_eq!(employees["data"]["meta"]["total"], 2);

    let (_, found) = get(&app, "/api/admin/users?q=maha", Some(&admin.token)).await;
    assert_eq!(found["data"]["meta"]["total"], 1);
    assert_eq!(found["data"]["data"][0]["email"], "maha@test.com");

    let (status, _) = get(&app, "/api/admin/users?role=wizard", Some(&admin.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deactivated_user_cannot_sign_in() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let admin = common::admin(&pool).await;
    let user = common::register(&app, "banned@test.com", "employee").await;

    let (status, resp) = request(
        &app,
        "PATCH",
        &format!("/api/admin/users/{}/status", user.id),
        Some(json!({ "is_active": false })),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["is_active"], false);

    let (status, _) = request(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "banned@test.com", "password": common::PASSWORD })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&app, "/api/auth/me", Some(&user.token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_cannot_deactivate_themselves() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let admin = common::admin(&pool).await;

    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/api/admin/users/{}/status", admin.id),
        Some(json!({ "is_active": false })),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_messages_are_triaged() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let admin = common::admin(&pool).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/contact",
        Some(json!({
            "name": "Lina",
            "email": "lina@example.com",
            "subject": "Partnership",
            "message": "We would like to list our vacancies with you."
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, fresh) = get(&app, "/api/admin/contacts?status=new", Some(&admin.token)).await;
    assert_eq!(fresh["data"]["meta"]["total"], 1);
    let id = fresh["data"]["data"][0]["id"].as_str().unwrap().to_string();

    let (status, resp) = request(
        &app,
        "PATCH",
        &format!("/api/admin/contacts/{id}/status"),
        Some(json!({ "status": "replied" })),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["status"], "replied");

    let (_, fresh) = get(&app, "/api/admin/contacts?status=new", Some(&admin.token)).await;
    assert_eq!(fresh["data"]["meta"]["total"], 0);
}

#[tokio::test]
async fn dashboard_and_analytics_count_activity() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let admin = common::admin(&pool).await;
    let employer = common::register(&app, "stats@test.com", "employer").await;
    let employee = common::register(&app, "counted@test.com", "employee").await;
    let job = common::active_job(&app, &employer, &admin, "Mechanic").await;
    common::create_job(&app, &employer, "Assistant Mechanic", true).await;
    common::apply(&app, &employee, &job).await;

    let (status, dash) = get(&app, "/api/admin/dashboard", Some(&admin.token)).await;
    assert_eq!(status, StatusCode::OK);
    let data = &dash["data"];
    assert_eq!(data["total_users"], 3);
    assert_eq!(data["total_employers"], 1);
    assert_eq!(data["total_employees"], 1);
    assert_eq!(data["total_jobs"], 2);
    assert_eq!(data["pending_jobs"], 1);
    assert_eq!(data["active_jobs"], 1);
    assert_eq!(data["total_applications"], 1);
    assert_eq!(data["recent_jobs"].as_array().unwrap().len(), 2);

    let (status, analytics) = get(&app, "/api/admin/analytics", Some(&admin.token)).await;
    assert_eq!(status, StatusCode::OK);
    let by_category = analytics["data"]["jobs_by_category"].as_array().unwrap();
    assert_eq!(by_category[0]["key"], "technology");
    assert_eq!(by_category[0]["count"], 2);
    assert!(!analytics["data"]["signups_last_30_days"].as_array().unwrap().is_empty());
}
