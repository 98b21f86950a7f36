use serde::{Deserialize, Serialize};

/// Why a product was suggested
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Birthday,
    Seasonal,
    Hobby,
    Preference,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    pub product_name: String,
    pub reason: String,
    pub category: RecommendationCategory,
}

/// The JSON shape the model is asked to answer with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructuredRecommendations {
    #[serde(default)]
    pub recommendations: Vec<RecommendationItem>,
    #[serde(default)]
    pub birthday_message: Option<String>,
    #[serde(default)]
    pub seasonal_note: Option<String>,
}

/// Outcome of a recommendation request
///
/// On the generated path `recommendations` holds the model's raw text, which
/// is untrusted and only *should* be JSON. `structured` is attached when that
/// text happened to parse. On the fallback path `error` explains the model
/// failure and `fallback_recommendations` carries the rule-based picks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredRecommendations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_recommendations: Option<Vec<RecommendationItem>>,
    pub days_until_birthday: i64,
}

impl RecommendationResult {
    pub fn generated(
        raw: String,
        days_until_birthday: i64,
        structured: Option<StructuredRecommendations>,
    ) -> Self {
        Self {
            success: true,
            recommendations: Some(raw),
            structured,
            error: None,
            fallback_recommendations: None,
            days_until_birthday,
        }
    }

    pub fn fallback(
        error: String,
        items: Vec<RecommendationItem>,
        days_until_birthday: i64,
    ) -> Self {
        Self {
            success: false,
            recommendations: None,
            structured: None,
            error: Some(error),
            fallback_recommendations: Some(items),
            days_until_birthday,
        }
    }
}
