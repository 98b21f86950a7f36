use crate::{
    models::{Product, StructuredRecommendations, UserProfile},
    services::calendar::BirthdayFacts,
};

/// Builds the instruction sent to the generative model
///
/// The model is told to pick only from the supplied catalog names and to
/// answer with the JSON layout of [`StructuredRecommendations`].
pub fn build_prompt(profile: &UserProfile, catalog: &[Product], facts: &BirthdayFacts) -> String {
    let product_names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();

    format!(
        r#"As a personalized grocery shopping assistant, recommend items for a user with the following profile:

User Details:
- Birthday: {month}/{day}
- Days until birthday: {days}
- Favorite cake flavor: {cake}
- Favorite snacks: {snacks}
- Hobbies: {hobbies}
- Birth season: {season}
- Zodiac sign: {zodiac}

Available products: {products:?}

Please provide:
1. 5-7 specific product recommendations chosen only from the available products
2. Birthday celebration suggestions (if the birthday is within 14 days)
3. Seasonal recommendations based on birth month
4. Hobby-related food/snack suggestions
5. Brief reasoning for each recommendation

Format your response as JSON with the following structure:
{{
    "recommendations": [
        {{
            "product_name": "Product Name",
            "reason": "Why this product fits the user's profile",
            "category": "birthday|seasonal|hobby|preference"
        }}
    ],
    "birthday_message": "Special message if birthday is near",
    "seasonal_note": "Note about seasonal preferences"
}}
"#,
        month = profile.birth_month,
        day = profile.birth_day,
        days = facts.days_until_birthday,
        cake = profile.favorite_cake,
        snacks = profile.favorite_snacks.as_deref().unwrap_or_default(),
        hobbies = profile.hobbies,
        season = facts.season,
        zodiac = facts.zodiac_sign,
        products = product_names,
    )
}

/// Best-effort parse of the model's answer into the requested layout
///
/// Models often wrap JSON in a Markdown code fence; that is stripped first.
/// Returns `None` for anything that does not parse.
pub fn parse_model_output(raw: &str) -> Option<StructuredRecommendations> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.strip_suffix("```").unwrap_or(rest).trim();
    }

    match serde_json::from_str(text) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(error = %e, "Model output is not structured JSON");
            None
        }
    }
}
