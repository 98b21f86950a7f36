use std::{sync::Arc, time::Duration};

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::{Datelike, Local, NaiveDate};
use serde_json::{json, Value};

use birthday_recommender::{
    api::{create_router, AppState},
    services::providers::{ModelClient, ModelError},
};

/// Model double that always fails like an unconfigured Gemini client
struct UnavailableModel;

#[async_trait::async_trait]
impl ModelClient for UnavailableModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::MissingApiKey)
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// Model double that answers with fixed text
struct CannedModel(&'static str);

#[async_trait::async_trait]
impl ModelClient for CannedModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

fn create_test_server(model: Arc<dyn ModelClient>) -> TestServer {
    let state = AppState::new(model, Duration::from_secs(5), "Gemini Recommendation API");
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn fallback_server() -> TestServer {
    create_test_server(Arc::new(UnavailableModel))
}

/// Birth (month, day) falling `days` from the local date
fn birthday_in(days: u64) -> (u32, u32) {
    let date: NaiveDate = Local::now().date_naive() + chrono::Days::new(days);
    (date.month(), date.day())
}

#[tokio::test]
async fn test_health_check() {
    let server = fallback_server();
    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Gemini Recommendation API");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_empty_object_requires_profile() {
    let server = fallback_server();
    let response = server
        .post("/api/gemini-recommendations")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User profile is required");
}

#[tokio::test]
async fn test_missing_body_requires_profile() {
    let server = fallback_server();
    let response = server.post("/api/gemini-recommendations").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "User profile is required");
}

#[tokio::test]
async fn test_missing_birthday_fields() {
    let server = fallback_server();
    let response = server
        .post("/api/gemini-recommendations")
        .json(&json!({"user_profile": {"favorite_cake": "x"}}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Birthday information is required for recommendations"
    );
}

#[tokio::test]
async fn test_impossible_birth_date_rejected() {
    let server = fallback_server();
    let response = server
        .post("/api/gemini-recommendations")
        .json(&json!({"user_profile": {"birth_day": 30, "birth_month": 2}}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid birth date: 2/30");
}

#[tokio::test]
async fn test_model_output_passed_through() {
    let server = create_test_server(Arc::new(CannedModel(
        r#"{"recommendations": [{"product_name": "Flour", "reason": "Cake time", "category": "birthday"}], "birthday_message": "Soon!"}"#,
    )));
    let (month, day) = birthday_in(3);

    let response = server
        .post("/api/gemini-recommendations")
        .json(&json!({
            "user_profile": {
                "id": "user-1",
                "birth_day": day,
                "birth_month": month,
                "favorite_cake": "Lemon",
                "favorite_snacks": "Cookies",
                "hobbies": "Hiking"
            },
            "available_products": [{"name": "Flour", "price": 3.0}]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["days_until_birthday"], 3);
    assert!(body["recommendations"]
        .as_str()
        .unwrap()
        .starts_with(r#"{"recommendations""#));
    assert_eq!(body["structured"]["birthday_message"], "Soon!");
    assert!(body.get("fallback_recommendations").is_none());
}

#[tokio::test]
async fn test_model_failure_falls_back() {
    let server = fallback_server();
    let (month, day) = birthday_in(2);

    let response = server
        .post("/api/gemini-recommendations")
        .json(&json!({
            "user_profile": {
                "id": "user-1",
                "full_name": "Test User",
                "birth_day": day,
                "birth_month": month,
                "favorite_cake": "Chocolate Cake",
                "favorite_snacks": "Cookies",
                "hobbies": "Reading"
            },
            "available_products": [
                {"name": "Granulated Sugar"},
                {"name": "Bananas"},
                {"name": "Oatmeal Cookies"}
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No Gemini API key configured");
    assert_eq!(body["days_until_birthday"], 2);

    let items = body["fallback_recommendations"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["product_name"], "Granulated Sugar");
    assert_eq!(items[0]["category"], "birthday");
    assert_eq!(
        items[0]["reason"],
        "For birthday cake preparation - Chocolate Cake flavor"
    );
    assert_eq!(items[1]["product_name"], "Oatmeal Cookies");
    assert_eq!(items[1]["category"], "preference");
}

#[tokio::test]
async fn test_fallback_without_catalog() {
    let server = fallback_server();
    let response = server
        .post("/api/gemini-recommendations")
        .json(&json!({"user_profile": {"birth_day": 4, "birth_month": 7}}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["fallback_recommendations"], json!([]));
}

#[tokio::test]
async fn test_sample_recommendations() {
    let server = fallback_server();
    let response = server.get("/api/test-recommendations").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["test_profile"]["id"], "test-user-123");
    assert_eq!(body["test_profile"]["birth_month"], 6);
    assert_eq!(body["test_profile"]["favorite_snacks"], "Cookies, Chips");
    assert_eq!(body["recommendations"]["success"], false);
    assert_eq!(body["recommendations"]["fallback_recommendations"], json!([]));
}

#[tokio::test]
async fn test_birthday_notification_tomorrow() {
    let server = fallback_server();
    let (month, day) = birthday_in(1);

    let response = server
        .post("/api/birthday-notification")
        .json(&json!({
            "user_profile": {"id": "u1", "full_name": "Sam", "birth_day": day, "birth_month": month}
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["notification"]["notification_type"], "birthday_tomorrow");
    assert_eq!(body["notification"]["days_until_birthday"], 1);
}

#[tokio::test]
async fn test_birthday_notification_none_when_far() {
    let server = fallback_server();
    let (month, day) = birthday_in(90);

    let response = server
        .post("/api/birthday-notification")
        .json(&json!({"user_profile": {"birth_day": day, "birth_month": month}}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["notification"], Value::Null);
}

#[tokio::test]
async fn test_unknown_endpoint() {
    let server = fallback_server();
    let response = server.get("/api/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = fallback_server();
    let id = "6f1c2a4e-9b0d-4c55-8e2f-3a7b9d1e0c42";
    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), id);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let server = fallback_server();
    let response = server
        .get("/api/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
