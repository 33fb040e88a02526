use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{self, get, request};

#[tokio::test]
async fn saving_a_job_toggles() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "saver@test.com", "employer").await;
    let employee = common::register(&app, "bookmarks@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let job = common::active_job(&app, &employer, &admin, "Barista").await;
    let uri = format!("/api/employee/saved-jobs/{job}/toggle");

    let (status, resp) = request(&app, "POST", &uri, None, Some(&employee.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["saved"], true);

    let (_, saved) = get(&app, "/api/employee/saved-jobs", Some(&employee.token)).await;
    assert_eq!(saved["data"]["meta"]["total"], 1);
    assert_eq!(saved["data"]["data"][0]["id"], job.as_str());

    let (_, resp) = request(&app, "POST", &uri, None, Some(&employee.token)).await;
    assert_eq!(resp["data"]["saved"], false);

    let (_, saved) = get(&app, "/api/employee/saved-jobs", Some(&employee.token)).await;
    assert_eq!(saved["data"]["meta"]["total"], 0);
}

#[tokio::test]
async fn saving_unknown_job_is_not_found() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employee = common::register(&app, "ghost@test.com", "employee").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/employee/saved-jobs/00000000-0000-0000-0000-000000000000/toggle",
        None,
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_defaults_to_account_name_then_saves() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employee = common::register(&app, "noura@test.com", "employee").await;

    let (status, profile) = get(&app, "/api/employee/profile", Some(&employee.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["data"]["full_name"], "noura");

    let (status, saved) = request(
        &app,
        "PUT",
        "/api/employee/profile",
        Some(json!({
            "full_name": "Noura Al-Harbi",
            "headline": "Registered nurse",
            "location": "Jeddah",
            "skills": ["ICU", "Triage"],
            "experience_years": 6
        })),
        Some(&employee.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{saved}");
    assert_eq!(saved["data"]["full_name"], "Noura Al-Harbi");

    let (_, profile) = get(&app, "/api/employee/profile", Some(&employee.token)).await;
    assert_eq!(profile["data"]["headline"], "Registered nurse");
}

#[tokio::test]
async fn company_profile_feeds_new_job_listings() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "brand@test.com", "employer").await;

    let (_, company) = get(&app, "/api/employer/company", Some(&employer.token)).await;
    assert_eq!(company["data"]["name"], "brand");

    let (status, saved) = request(
        &app,
        "PUT",
        "/api/employer/company",
        Some(json!({
            "name": "Brand Co.",
            "name_ar": "شركة براند",
            "website": "https://brand.example.com",
            "industry": "technology",
            "location": "Dubai"
        })),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{saved}");

    let id = common::create_job(&app, &employer, "Brand Manager", false).await;
    let (_, job) = get(&app, &format!("/api/employer/jobs/{id}"), Some(&employer.token)).await;
    assert_eq!(job["data"]["company_name"], "Brand Co.");
}

#[tokio::test]
async fn employee_dashboard_counts_pipeline() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "dash@test.com", "employer").await;
    let employee = common::register(&app, "busy@test.com", "employee").await;
    let admin = common::admin(&pool).await;
    let first = common::active_job(&app, &employer, &admin, "Tailor").await;
    let second = common::active_job(&app, &employer, &admin, "Florist").await;

    let application = common::apply(&app, &employee, &first).await;
    common::apply(&app, &employee, &second).await;
    request(
        &app,
        "PATCH",
        &format!("/api/employer/applications/{application}/status"),
        Some(json!({ "status": "interview" })),
        Some(&employer.token),
    )
    .await;
    request(
        &app,
        "POST",
        &format!("/api/employee/saved-jobs/{second}/toggle"),
        None,
        Some(&employee.token),
    )
    .await;

    let (status, dash) = get(&app, "/api/employee/dashboard", Some(&employee.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dash["data"]["total_applications"], 2);
    assert_eq!(dash["data"]["interviews"], 1);
    assert_eq!(dash["data"]["saved_jobs"], 1);
    assert_eq!(dash["data"]["recommended_jobs"].as_array().unwrap().len(), 2);

    let (_, dash) = get(&app, "/api/employer/dashboard", Some(&employer.token)).await;
    assert_eq!(dash["data"]["total_applications"], 2);
    assert_eq!(dash["data"]["new_applications"], 1);
    assert_eq!(dash["data"]["active_jobs"], 2);
}
