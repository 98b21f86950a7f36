use axum::{body::Bytes, extract::State, Extension, Json};
use chrono::{Local, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Product, ProfilePayload, RecommendationResult, UserProfile},
    services::notifications::{self, BirthdayNotification},
};

use super::AppState;

pub const PROFILE_REQUIRED: &str = "User profile is required";

// Request/Response types

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct TestRecommendationsResponse {
    pub test_profile: UserProfile,
    pub recommendations: RecommendationResult,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification: Option<BirthdayNotification>,
}

/// Body of a profile-carrying request after boundary validation
#[derive(Debug)]
pub struct ProfileRequest {
    pub profile: UserProfile,
    pub available_products: Option<Vec<Product>>,
}

impl ProfileRequest {
    /// Parses `{user_profile, available_products?}` from a raw body
    ///
    /// Empty, non-JSON and non-object bodies are all reported as a missing
    /// profile.
    pub fn parse(body: &[u8]) -> AppResult<Self> {
        let mut payload = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => return Err(AppError::InvalidInput(PROFILE_REQUIRED.to_string())),
        };

        let profile: ProfilePayload = match payload.remove("user_profile") {
            None | Some(Value::Null) => {
                return Err(AppError::InvalidInput(PROFILE_REQUIRED.to_string()))
            }
            Some(value) => serde_json::from_value(value)
                .map_err(|e| AppError::InvalidInput(format!("Invalid user profile: {}", e)))?,
        };

        let available_products = match payload.remove("available_products") {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value(value)
                    .map_err(|e| AppError::InvalidInput(format!("Invalid product list: {}", e)))?,
            ),
        };

        Ok(Self {
            profile: profile.validate()?,
            available_products,
        })
    }
}

/// Profile used by the self-test endpoint
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "test-user-123".to_string(),
        full_name: "Test User".to_string(),
        birth_day: 15,
        birth_month: 6,
        favorite_cake: "Chocolate Cake".to_string(),
        favorite_snacks: Some("Cookies, Chips".to_string()),
        hobbies: "Reading, Gaming".to_string(),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// AI recommendations with rule-based fallback
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> AppResult<Json<RecommendationResult>> {
    let request = ProfileRequest::parse(&body).map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Rejected recommendation request");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        user_id = %request.profile.id,
        product_count = request.available_products.as_ref().map_or(0, Vec::len),
        "Processing recommendation request"
    );

    let result = state
        .resolver
        .get_recommendations(&request.profile, request.available_products.as_deref())
        .await;

    tracing::info!(
        request_id = %request_id,
        success = result.success,
        "Recommendation request completed"
    );

    Ok(Json(result))
}

/// Runs the resolver against the built-in sample profile
pub async fn test_recommendations(
    State(state): State<AppState>,
) -> Json<TestRecommendationsResponse> {
    let test_profile = sample_profile();
    let recommendations = state.resolver.get_recommendations(&test_profile, None).await;

    Json(TestRecommendationsResponse {
        test_profile,
        recommendations,
    })
}

/// Birthday reminder for the supplied profile, if one is due
pub async fn birthday_notification(body: Bytes) -> AppResult<Json<NotificationResponse>> {
    let request = ProfileRequest::parse(&body)?;
    let today = Local::now().date_naive();

    Ok(Json(NotificationResponse {
        notification: notifications::notification_for(&request.profile, today),
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound
}
