pub mod calendar;
pub mod fallback;
pub mod notifications;
pub mod prompt;
pub mod providers;
pub mod resolver;

pub use resolver::RecommendationResolver;
