//! Interview grading API tests.
//!
//! These run fully in-process against a mock grader; no upstream model or
//! network access is required.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::{grade_request, test_app, MockGrader};

/// A valid answer comes back with the grader's score and feedback.
#[tokio::test]
async fn test_grade_success() {
    let server = TestServer::new(test_app(MockGrader::score(8.0, "Отличный ответ."))).unwrap();

    let response = server
        .post("/api/interview")
        .json(&grade_request("Что такое JOIN?", "Соединение таблиц.", "Склейка по ключу."))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["score"].as_f64().unwrap(), 8.0);
    assert_eq!(body["feedback"].as_str().unwrap(), "Отличный ответ.");
}

/// Blank fields are rejected before any grading happens.
#[tokio::test]
async fn test_blank_field_is_bad_request() {
    let server = TestServer::new(test_app(MockGrader::score(8.0, "ok"))).unwrap();

    let response = server
        .post("/api/interview")
        .json(&grade_request("Что такое JOIN?", "Соединение таблиц.", "   "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "bad_request");
}

/// Upstream failure surfaces as 502, never a success with a fake score.
#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let server = TestServer::new(test_app(MockGrader::failing())).unwrap();

    let response = server
        .post("/api/interview")
        .json(&grade_request("Вопрос?", "Ответ.", "Мой ответ."))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "grading_error");
}

/// The dataset is served as-is at /data.json.
#[tokio::test]
async fn test_data_json_served() {
    let server = TestServer::new(test_app(MockGrader::score(5.0, "ok"))).unwrap();

    let response = server.get("/data.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["cards"].as_array().unwrap().len(), 3);
    assert_eq!(body["meta"]["topics"][0].as_str().unwrap(), "SQL");
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::new(test_app(MockGrader::score(5.0, "ok"))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}
