use std::{sync::Arc, time::Duration};

use chrono::{Local, NaiveDate};

use crate::{
    models::{Product, RecommendationResult, UserProfile},
    services::{
        calendar, fallback, prompt,
        providers::{ModelClient, ModelError},
    },
};

/// Recommendation Resolver
///
/// Asks the generative model first and substitutes the rule-based fallback
/// when the call fails or exceeds `timeout`. Model failures never escape as
/// errors; they end up in the result's `error` field.
pub struct RecommendationResolver {
    model: Arc<dyn ModelClient>,
    timeout: Duration,
}

impl RecommendationResolver {
    pub fn new(model: Arc<dyn ModelClient>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    /// Resolves recommendations relative to the local calendar date
    pub async fn get_recommendations(
        &self,
        profile: &UserProfile,
        catalog: Option<&[Product]>,
    ) -> RecommendationResult {
        let today = Local::now().date_naive();
        self.get_recommendations_on(profile, catalog, today).await
    }

    /// Resolves recommendations as if `today` were the current date
    ///
    /// A missing catalog is treated as empty.
    pub async fn get_recommendations_on(
        &self,
        profile: &UserProfile,
        catalog: Option<&[Product]>,
        today: NaiveDate,
    ) -> RecommendationResult {
        let catalog = catalog.unwrap_or_default();
        let facts = calendar::facts_for(profile.birth_month, profile.birth_day, today);
        let prompt = prompt::build_prompt(profile, catalog, &facts);

        match self.invoke(&prompt).await {
            Ok(raw) => {
                let structured = prompt::parse_model_output(&raw);
                tracing::info!(
                    user_id = %profile.id,
                    provider = self.model.name(),
                    days_until_birthday = facts.days_until_birthday,
                    structured = structured.is_some(),
                    "Model recommendations generated"
                );
                RecommendationResult::generated(raw, facts.days_until_birthday, structured)
            }
            Err(e) => {
                let items = fallback::recommend(profile, catalog, today);
                tracing::warn!(
                    user_id = %profile.id,
                    provider = self.model.name(),
                    error = %e,
                    fallback_count = items.len(),
                    "Model call failed, using fallback recommendations"
                );
                RecommendationResult::fallback(e.to_string(), items, facts.days_until_birthday)
            }
        }
    }

    async fn invoke(&self, prompt: &str) -> Result<String, ModelError> {
        tokio::time::timeout(self.timeout, self.model.generate(prompt))
            .await
            .unwrap_or(Err(ModelError::Timeout(self.timeout)))
    }
}
