use std::{sync::Arc, time::Duration};

use crate::services::{providers::ModelClient, RecommendationResolver};

/// Shared application state
///
/// Built once at start-up and read-only afterwards; the model client is
/// injected so tests can substitute their own.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RecommendationResolver>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelClient>, model_timeout: Duration, service_name: &str) -> Self {
        Self {
            resolver: Arc::new(RecommendationResolver::new(model, model_timeout)),
            service_name: Arc::from(service_name),
        }
    }
}
