use chrono::NaiveDate;

use crate::{
    models::{Product, RecommendationCategory, RecommendationItem, UserProfile},
    services::calendar,
};

/// Catalog names containing any of these are treated as cake ingredients
const CAKE_INGREDIENTS: [&str; 5] = ["flour", "eggs", "butter", "sugar", "vanilla"];

/// Birthdays this close get cake-ingredient suggestions
pub const BIRTHDAY_WINDOW_DAYS: i64 = 14;

pub const MAX_FALLBACK_RECOMMENDATIONS: usize = 5;

/// Rule-based recommendations used when the model cannot answer
///
/// Cake ingredients come first (only when the birthday is near), then
/// products whose name contains the favourite-snacks text. Catalog order is
/// kept within each group and the result is capped at
/// [`MAX_FALLBACK_RECOMMENDATIONS`]. Only catalog products are ever returned.
///
/// The snack match treats the whole `favorite_snacks` string as one literal
/// substring, so a list like "Cookies, Chips" only matches a product whose
/// name contains exactly that text. Whitespace is significant and an empty
/// string matches every product. A profile without the field gets no
/// preference items.
pub fn recommend(
    profile: &UserProfile,
    catalog: &[Product],
    today: NaiveDate,
) -> Vec<RecommendationItem> {
    let days_until = calendar::days_until_birthday(profile.birth_month, profile.birth_day, today);

    let birthday_items = catalog
        .iter()
        .filter(|_| days_until <= BIRTHDAY_WINDOW_DAYS)
        .filter(|product| is_cake_ingredient(&product.name))
        .map(|product| RecommendationItem {
            product_name: product.name.clone(),
            reason: format!(
                "For birthday cake preparation - {} flavor",
                profile.favorite_cake
            ),
            category: RecommendationCategory::Birthday,
        });

    let preference_items = profile
        .favorite_snacks
        .iter()
        .flat_map(|snacks| {
            let needle = snacks.to_lowercase();
            catalog
                .iter()
                .filter(move |product| product.name.to_lowercase().contains(&needle))
                .map(move |product| RecommendationItem {
                    product_name: product.name.clone(),
                    reason: format!("Matches your favorite snack preference: {}", snacks),
                    category: RecommendationCategory::Preference,
                })
        });

    birthday_items
        .chain(preference_items)
        .take(MAX_FALLBACK_RECOMMENDATIONS)
        .collect()
}

fn is_cake_ingredient(name: &str) -> bool {
    let name = name.to_lowercase();
    CAKE_INGREDIENTS
        .iter()
        .any(|ingredient| name.contains(ingredient))
}
