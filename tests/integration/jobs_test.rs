//! Integration tests for the job catalog endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, job_record};

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_submit_inserts_and_deduplicates() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/jobs/submit",
            Some(json!({"jobs": [job_record(1), job_record(2)]})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["inserted"], json!(2));
    assert_eq!(response.body["duplicates"], json!(0));

    // Re-submitting the same batch inserts nothing
    let response = app
        .request(
            "POST",
            "/api/jobs/submit",
            Some(json!({"jobs": [job_record(1), job_record(2)]})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["inserted"], json!(0));
    assert_eq!(response.body["duplicates"], json!(2));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(&app.db_pool)
        .await
        .expect("count query failed");
    assert_eq!(count, 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_submit_rejects_invalid_record() {
    let app = TestApp::new().await;

    let mut record = job_record(1);
    record["url"] = json!("x".repeat(501));

    let response = app
        .request("POST", "/api/jobs/submit", Some(json!({"jobs": [record]})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(&app.db_pool)
        .await
        .expect("count query failed");
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_search_filters_by_term_and_source() {
    let app = TestApp::new().await;

    let mut indeed = job_record(3);
    indeed["source"] = json!("indeed");
    indeed["title"] = json!("Data Scientist");
    app.request(
        "POST",
        "/api/jobs/submit",
        Some(json!({"jobs": [job_record(1), job_record(2), indeed]})),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/jobs/search",
            Some(json!({"search": "backend", "source": "linkedin"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));

    let response = app
        .request("POST", "/api/jobs/search", Some(json!({"limit": 0})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("INVALID_CRITERIA"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_stats_aggregates() {
    let app = TestApp::new().await;

    let mut indeed = job_record(3);
    indeed["source"] = json!("indeed");
    app.request(
        "POST",
        "/api/jobs/submit",
        Some(json!({"jobs": [job_record(1), job_record(2), indeed]})),
    )
    .await;

    let response = app.request("GET", "/api/jobs/stats", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_jobs"], json!(3));
    assert_eq!(response.body["jobs_by_source"]["linkedin"], json!(2));
    assert_eq!(response.body["jobs_by_source"]["indeed"], json!(1));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], json!("ok"));
}
