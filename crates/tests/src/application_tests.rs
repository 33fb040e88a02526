use axum::http::StatusCode;
use serde_json::json;

use crate::common::{self, get, request};

#[tokio::test]
async fn employee_applies_once_per_job() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "hire@test.com", "employer").await;
    let employee = common::register(&app, "seeker@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let job = common::active_job(&app, &employer, &admin, "Frontend Developer").await;

    let application = common::apply(&app, &employee, &job).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/employee/applications",
        Some(json!({ "job_id": job })),
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, mine) = get(&app, "/api/employee/applications", Some(&employee.token)).await;
    assert_eq!(mine["data"]["meta"]["total"], 1);
    assert_eq!(mine["data"]["data"][0]["id"], application.as_str());
    assert_eq!(mine["data"]["data"][0]["job_title"], "Frontend Developer");
}

#[tokio::test]
async fn applying_to_a_draft_is_rejected() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "drafty@test.com", "employer").await;
    let employee = common::register(&app, "eager@test.com", "employee").await;
    let job = common::create_job(&app, &employer, "Chef", false).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/employee/applications",
        Some(json!({ "job_id": job })),
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(
        &app,
        "POST",
        "/api/employee/applications",
        Some(json!({ "job_id": "00000000-0000-0000-0000-000000000000" })),
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employers_cannot_apply() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "boss@test.com", "employer").await;
    let admin = common::admin(&pool).await;
    let job = common::active_job(&app, &employer, &admin, "Driver").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/employee/applications",
        Some(json!({ "job_id": job })),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn employer_moves_application_forward_only() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "pipeline@test.com", "employer").await;
    let employee = common::register(&app, "candidate@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let job = common::active_job(&app, &employer, &admin, "Teacher").await;
    let application = common::apply(&app, &employee, &job).await;
    let uri = format!("/api/employer/applications/{application}/status");

    let (status, resp) = request(
        &app,
        "PATCH",
        &uri,
        Some(json!({ "status": "interview", "note": "  Tuesday 10am  " })),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{resp}");
    assert_eq!(resp["data"]["status"], "interview");
    assert_eq!(resp["data"]["employer_note"], "Tuesday 10am");

    let (status, _) = request(&app, "PATCH", &uri, Some(json!({ "status": "reviewing" })), Some(&employer.token)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(&app, "PATCH", &uri, Some(json!({ "status": "accepted" })), Some(&employer.token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "PATCH", &uri, Some(json!({ "status": "rejected" })), Some(&employer.token)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Once past review the employee can no longer withdraw.
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/employee/applications/{application}"),
        None,
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn other_employers_cannot_touch_applications() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "owner@test.com", "employer").await;
    let rival = common::register(&app, "rival@test.com", "employer").await;
    let employee = common::register(&app, "applicant@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let job = common::active_job(&app, &employer, &admin, "Pharmacist").await;
    let application = common::apply(&app, &employee, &job).await;

    let (status, _) = get(
        &app,
        &format!("/api/employer/applications/{application}/candidate"),
        Some(&rival.token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = get(&app, "/api/employer/applications", Some(&rival.token)).await;
    assert_eq!(list["data"]["meta"]["total"], 0);

    let (status, candidate) = get(
        &app,
        &format!("/api/employer/applications/{application}/candidate"),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(candidate["data"]["application"]["applicant_email"], "applicant@test.com");
}

#[tokio::test]
async fn withdrawn_application_can_be_resubmitted() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "again@test.com", "employer").await;
    let employee = common::register(&app, "fickle@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let job = common::active_job(&app, &employer, &admin, "Electrician").await;
    let application = common::apply(&app, &employee, &job).await;

    let (status, resp) = request(
        &app,
        "DELETE",
        &format!("/api/employee/applications/{application}"),
        None,
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);

    common::apply(&app, &employee, &job).await;
}

#[tokio::test]
async fn employer_filters_applications_by_job_and_status() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "filter@test.com", "employer").await;
    let first = common::register(&app, "first@test.com", "employee").await;
    let second = common::register(&app, "second@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let job_a = common::active_job(&app, &employer, &admin, "Porter").await;
    let job_b = common::active_job(&app, &employer, &admin, "Concierge").await;

    let a1 = common::apply(&app, &first, &job_a).await;
    common::apply(&app, &second, &job_a).await;
    common::apply(&app, &first, &job_b).await;

    request(
        &app,
        "PATCH",
        &format!("/api/employer/applications/{a1}/status"),
        Some(json!({ "status": "reviewing" })),
        Some(&employer.token),
    )
    .await;

    let (_, by_job) = get(&app, &format!("/api/employer/applications?job_id={job_a}"), Some(&employer.token)).await;
    assert_eq!(by_job["data"]["meta"]["total"], 2);

    let (_, by_status) = get(&app, "/api/employer/applications?status=reviewed", Some(&employer.token)).await;
    assert_eq!(by_status["data"]["meta"]["total"], 1);

    let (status, _) = get(&app, "/api/employer/applications?status=hired", Some(&employer.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
