//! Integration tests for storing and listing jobs over HTTP.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use http::StatusCode;
use serde_json::{Value, json};

use jobboard_core::types::{JOB_ID_LEN, is_url_safe_byte};

fn assert_short_id(value: &Value) {
    let id = value.as_str().expect("id should be a string");
    assert_eq!(id.len(), JOB_ID_LEN, "id {id:?} has the wrong length");
    assert!(id.bytes().all(is_url_safe_byte), "id {id:?} is not URL-safe");
}

#[tokio::test]
async fn test_list_with_no_jobs_returns_empty_array() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/job", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "jobs": [] }));
}

#[tokio::test]
async fn test_store_then_list_returns_the_job() {
    let app = helpers::TestApp::new().await;

    let stored = app.request("POST", "/job", Some(helpers::acme_job())).await;
    assert_eq!(stored.status, StatusCode::OK);
    assert!(stored.raw.is_empty(), "store should answer with an empty body");

    let response = app.request("GET", "/job", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let jobs = response.body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 1);

    let job = &jobs[0];
    assert_short_id(&job["id"]);
    assert_eq!(job["title"], "Engineer");
    assert_eq!(job["organizationName"], "Acme");
    assert_eq!(job["contractType"], "Full-time");
    assert_eq!(job["location"], "Remote");
    assert_eq!(job["link"], "https://acme.example/jobs/1");
}

#[tokio::test]
async fn test_empty_strings_round_trip_exactly() {
    let app = helpers::TestApp::new().await;
    let input = json!({
        "title": "",
        "organizationName": "",
        "contractType": "",
        "location": "",
        "link": "",
    });

    let stored = app.request("POST", "/job", Some(input.clone())).await;
    assert_eq!(stored.status, StatusCode::OK);

    let response = app.request("GET", "/job", None).await;
    let mut job = response.body["jobs"][0].clone();
    assert_short_id(&job["id"]);
    job.as_object_mut().expect("object").remove("id");
    assert_eq!(job, input);
}

#[tokio::test]
async fn test_unicode_fields_round_trip_exactly() {
    let app = helpers::TestApp::new().await;
    let input = json!({
        "title": "Ingénieur logiciel 🚀",
        "organizationName": "Société Générale",
        "contractType": "CDI",
        "location": "Zürich",
        "link": "not even a url",
    });

    app.request("POST", "/job", Some(input.clone())).await;

    let response = app.request("GET", "/job", None).await;
    let mut job = response.body["jobs"][0].clone();
    job.as_object_mut().expect("object").remove("id");
    assert_eq!(job, input);
}

#[tokio::test]
async fn test_each_store_gets_a_distinct_id() {
    let app = helpers::TestApp::new().await;

    for _ in 0..10 {
        let response = app.request("POST", "/job", Some(helpers::acme_job())).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.request("GET", "/job", None).await;
    let ids: HashSet<String> = response.body["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .map(|job| {
            assert_short_id(&job["id"]);
            job["id"].as_str().unwrap_or_default().to_string()
        })
        .collect();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_concurrent_stores_are_all_listed() {
    let app = Arc::new(helpers::TestApp::new().await);

    let handles: Vec<_> = (0..25)
        .map(|i| {
            let app = Arc::clone(&app);
            tokio::spawn(async move {
                let mut body = helpers::acme_job();
                body["title"] = json!(format!("job-{i}"));
                app.request("POST", "/job", Some(body)).await.status
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.expect("task panicked"), StatusCode::OK);
    }

    let response = app.request("GET", "/job", None).await;
    let titles: HashSet<String> = response.body["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .map(|job| job["title"].as_str().unwrap_or_default().to_string())
        .collect();
    let expected: HashSet<String> = (0..25).map(|i| format!("job-{i}")).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = helpers::TestApp::new().await;
    let mut body = helpers::acme_job();
    body.as_object_mut().expect("object").remove("link");

    let response = app.request("POST", "/job", Some(body)).await;

    assert!(
        response.status.is_client_error(),
        "expected 4xx, got {}",
        response.status
    );
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn test_wrongly_typed_field_is_rejected() {
    let app = helpers::TestApp::new().await;
    let mut body = helpers::acme_job();
    body["title"] = json!(42);

    let response = app.request("POST", "/job", Some(body)).await;

    assert!(response.status.is_client_error());
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn test_random_source_failure_is_a_server_error() {
    let app = helpers::TestApp::with_ids(Arc::new(helpers::NoEntropy)).await;

    let response = app.request("POST", "/job", Some(helpers::acme_job())).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "random source unavailable");
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn test_duplicate_id_surfaces_the_database_message() {
    let app = helpers::TestApp::with_ids(Arc::new(helpers::ConstantIds)).await;

    let first = app.request("POST", "/job", Some(helpers::acme_job())).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", "/job", Some(helpers::acme_job())).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");
    let message = second.body["message"].as_str().expect("message");
    assert!(message.contains("duplicate key"), "{message}");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_list_failure_returns_generic_message() {
    let app = helpers::TestApp::new().await;
    app.request("POST", "/job", Some(helpers::acme_job())).await;
    app.store.break_listing();

    let response = app.request("GET", "/job", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "could not list jobs");
    assert!(response.body.get("jobs").is_none());
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("DELETE", "/job", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
