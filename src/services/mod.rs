pub mod aggregate;
pub mod lookup;
pub mod providers;
pub mod reviews;
pub mod sentiment;

pub use aggregate::{aggregate, classify_batch};
pub use lookup::resolve_app;
pub use reviews::{fetch_reviews, DEFAULT_REVIEW_COUNT, FALLBACK_REVIEW_COUNT};
pub use sentiment::SentimentClassifier;
