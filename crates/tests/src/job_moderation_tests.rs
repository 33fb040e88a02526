use axum::http::StatusCode;
use serde_json::json;

use crate::common::{self, get, request};

#[tokio::test]
async fn draft_job_is_hidden_until_approved() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "acme@test.com", "employer").await;
    let admin = common::admin(&pool).await;

    let id = common::create_job(&app, &employer, "Backend Engineer", false).await;
    let (_, job) = get(&app, &format!("/api/employer/jobs/{id}"), Some(&employer.token)).await;
    assert_eq!(job["data"]["status"], "draft");
    assert_eq!(job["data"]["currency"], "SAR");
    assert_eq!(job["data"]["company_name"], "acme");

    // Visitors cannot see drafts; the owner and admins can.
    let (status, _) = get(&app, &format!("/api/jobs/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/jobs/{id}"), Some(&admin.token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, resp) = request(
        &app,
        "POST",
        &format!("/api/employer/jobs/{id}/submit"),
        None,
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["status"], "pending");

    let (_, pending) = get(&app, "/api/admin/jobs/pending", Some(&admin.token)).await;
    assert_eq!(pending["data"]["meta"]["total"], 1);

    let (status, resp) = request(
        &app,
        "POST",
        &format!("/api/admin/jobs/{id}/approve"),
        None,
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["status"], "active");
    assert!(resp["data"]["approved_at"].is_string());

    let (_, listing) = get(&app, "/api/jobs?q=backend", None).await;
    assert_eq!(listing["data"]["meta"]["total"], 1);
    assert_eq!(listing["data"]["data"][0]["id"], id.as_str());
}

#[tokio::test]
async fn approving_twice_is_a_conflict() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "twice@test.com", "employer").await;
    let admin = common::admin(&pool).await;
    let id = common::active_job(&app, &employer, &admin, "Data Analyst").await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/admin/jobs/{id}/approve"),
        None,
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn decline_requires_reason_and_allows_resubmission() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "decl@test.com", "employer").await;
    let admin = common::admin(&pool).await;
    let id = common::create_job(&app, &employer, "Sales Lead", true).await;

    let (status, _) = request(
        &app,
        "POST",
        &format!("/api/admin/jobs/{id}/decline"),
        Some(json!({ "reason": "   " })),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, resp) = request(
        &app,
        "POST",
        &format!("/api/admin/jobs/{id}/decline"),
        Some(json!({ "reason": "Salary range is missing" })),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["status"], "declined");
    assert_eq!(resp["data"]["decline_reason"], "Salary range is missing");

    // Editing with submit_for_review sends it back to moderation and clears the reason.
    let (status, resp) = request(
        &app,
        "PUT",
        &format!("/api/employer/jobs/{id}"),
        Some(common::job_body("Senior Sales Lead", true)),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{resp}");
    assert_eq!(resp["data"]["status"], "pending");
    assert!(resp["data"]["decline_reason"].is_null());
    assert_eq!(resp["data"]["title"], "Senior Sales Lead");
}

#[tokio::test]
async fn active_jobs_cannot_be_edited_or_deleted() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "locked@test.com", "employer").await;
    let admin = common::admin(&pool).await;
    let id = common::active_job(&app, &employer, &admin, "Nurse").await;

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/employer/jobs/{id}"),
        Some(common::job_body("Head Nurse", false)),
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(&app, "DELETE", &format!("/api/employer/jobs/{id}"), None, Some(&employer.token)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, resp) = request(
        &app,
        "POST",
        &format!("/api/employer/jobs/{id}/close"),
        None,
        Some(&employer.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["status"], "closed");

    let (_, listing) = get(&app, "/api/jobs", None).await;
    assert_eq!(listing["data"]["meta"]["total"], 0);
}

#[tokio::test]
async fn drafts_can_be_deleted() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "tidy@test.com", "employer").await;
    let id = common::create_job(&app, &employer, "Temporary Cashier", false).await;

    let (status, resp) = request(&app, "DELETE", &format!("/api/employer/jobs/{id}"), None, Some(&employer.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);

    let (status, _) = get(&app, &format!("/api/employer/jobs/{id}"), Some(&employer.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employers_only_see_their_own_jobs() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let mine = common::register(&app, "mine@test.com", "employer").await;
    let theirs = common::register(&app, "theirs@test.com", "employer").await;
    let id = common::create_job(&app, &mine, "Accountant", false).await;

    let (status, _) = get(&app, &format!("/api/employer/jobs/{id}"), Some(&theirs.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = get(&app, "/api/employer/jobs", Some(&theirs.token)).await;
    assert_eq!(list["data"]["meta"]["total"], 0);
}

#[tokio::test]
async fn invalid_job_body_reports_fields() {
    let Some((app, _pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "typo@test.com", "employer").await;

    let mut body = common::job_body("Welder", false);
    body["salary_min"] = json!(15000);
    body["salary_max"] = json!(9000);
    let (status, resp) = request(&app, "POST", "/api/employer/jobs", Some(body), Some(&employer.token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["salary_max"].is_string());

    let mut body = common::job_body("Welder", false);
    body["category"] = json!("astrology");
    let (status, resp) = request(&app, "POST", "/api/employer/jobs", Some(body), Some(&employer.token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["category"].is_string());
}

#[tokio::test]
async fn public_search_filters_and_paginates() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "many@test.com", "employer").await;
    let admin = common::admin(&pool).await;
    for i in 0..3 {
        common::active_job(&app, &employer, &admin, &format!("Engineer {i}")).await;
    }
    let mut remote = common::job_body("Remote Designer", true);
    remote["is_remote"] = json!(true);
    remote["category"] = json!("marketing");
    let (_, created) = request(&app, "POST", "/api/employer/jobs", Some(remote), Some(&employer.token)).await;
    let remote_id = created["data"]["id"].as_str().unwrap().to_string();
    request(&app, "POST", &format!("/api/admin/jobs/{remote_id}/approve"), None, Some(&admin.token)).await;

    let (_, page) = get(&app, "/api/jobs?limit=2&page=2", None).await;
    assert_eq!(page["data"]["meta"]["total"], 4);
    assert_eq!(page["data"]["meta"]["total_pages"], 2);
    assert_eq!(page["data"]["data"].as_array().unwrap().len(), 2);

    let (_, remote) = get(&app, "/api/jobs?remote=true", None).await;
    assert_eq!(remote["data"]["meta"]["total"], 1);
    assert_eq!(remote["data"]["data"][0]["id"], remote_id.as_str());

    let (_, marketing) = get(&app, "/api/jobs?category=marketing", None).await;
    assert_eq!(marketing["data"]["meta"]["total"], 1);
}

#[tokio::test]
async fn admin_listing_filters_by_employer() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let acme = common::register(&app, "acme@test.com", "employer").await;
    let other = common::register(&app, "other@test.com", "employer").await;
    let admin = common::admin(&pool).await;

    let id = common::create_job(&app, &acme, "Backend Engineer", true).await;
    common::create_job(&app, &other, "Accountant", true).await;

    let (_, all) = get(&app, "/api/admin/jobs", Some(&admin.token)).await;
    assert_eq!(all["data"]["meta"]["total"], 2);

    let (status, mine) = get(
        &app,
        &format!("/api/admin/jobs?employer_id={}", acme.id),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine["data"]["meta"]["total"], 1);
    assert_eq!(mine["data"]["data"][0]["id"], id.as_str());

    // An employer's own listing stays pinned to them whatever they ask for.
    let (_, pinned) = get(
        &app,
        &format!("/api/employer/jobs?employer_id={}", other.id),
        Some(&acme.token),
    )
    .await;
    assert_eq!(pinned["data"]["meta"]["total"], 1);
    assert_eq!(pinned["data"]["data"][0]["id"], id.as_str());
}

#[tokio::test]
async fn review_queue_serves_oldest_submission_first() {
    let Some((app, pool, _guard)) = common::test_app().await else {
        return;
    };
    let employer = common::register(&app, "queue@test.com", "employer").await;
    let admin = common::admin(&pool).await;

    let first = common::create_job(&app, &employer, "Nurse", true).await;
    let second = common::create_job(&app, &employer, "Pharmacist", true).await;

    let (_, queue) = get(&app, "/api/admin/jobs/pending", Some(&admin.token)).await;
    assert_eq!(queue["data"]["data"][0]["id"], first.as_str());
    assert_eq!(queue["data"]["data"][1]["id"], second.as_str());

    let (_, listing) = get(&app, "/api/admin/jobs", Some(&admin.token)).await;
    assert_eq!(listing["data"]["data"][0]["id"], second.as_str());
}
