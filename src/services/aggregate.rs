use crate::{
    models::{AggregateResult, ClassifiedReview, Recommendation, Review},
    services::sentiment::SentimentClassifier,
};

/// Positive ratio strictly above this yields a favorable verdict
pub const FAVORABLE_POSITIVE_RATIO: f64 = 0.7;

/// Negative ratio strictly above this yields an unfavorable verdict
pub const UNFAVORABLE_NEGATIVE_RATIO: f64 = 0.5;

/// Classify every review in a batch
///
/// Classification is a pure per-review function; batch order is preserved.
pub fn classify_batch(
    classifier: &SentimentClassifier,
    reviews: &[Review],
) -> Vec<ClassifiedReview> {
    reviews
        .iter()
        .map(|review| {
            let polarity = classifier.polarity(&review.content);
            ClassifiedReview {
                review: review.clone(),
                sentiment: crate::models::Sentiment::from_polarity(polarity),
                polarity,
            }
        })
        .collect()
}

/// Tally sentiment counts over a batch and derive the recommendation
///
/// Ratios are 0 for an empty batch, which falls through the rules to mixed.
pub fn aggregate(classifier: &SentimentClassifier, reviews: &[Review]) -> AggregateResult {
    let classified = classify_batch(classifier, reviews);
    aggregate_classified(&classified)
}

pub fn aggregate_classified(classified: &[ClassifiedReview]) -> AggregateResult {
    use crate::models::Sentiment;

    let total = classified.len();
    let positive_count = classified
        .iter()
        .filter(|c| c.sentiment == Sentiment::Positive)
        .count();
    let negative_count = classified
        .iter()
        .filter(|c| c.sentiment == Sentiment::Negative)
        .count();
    let neutral_count = total - positive_count - negative_count;

    let (positive_ratio, negative_ratio) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            positive_count as f64 / total as f64,
            negative_count as f64 / total as f64,
        )
    };

    let recommendation = recommend(positive_ratio, negative_ratio);

    tracing::info!(
        total,
        positive = positive_count,
        neutral = neutral_count,
        negative = negative_count,
        recommendation = ?recommendation,
        "Batch aggregated"
    );

    AggregateResult {
        positive_count,
        neutral_count,
        negative_count,
        total,
        positive_ratio,
        negative_ratio,
        recommendation,
    }
}

/// Ordered rule evaluation; the first matching rule wins
fn recommend(positive_ratio: f64, negative_ratio: f64) -> Recommendation {
    if positive_ratio > FAVORABLE_POSITIVE_RATIO {
        Recommendation::Favorable
    } else if negative_ratio > UNFAVORABLE_NEGATIVE_RATIO {
        Recommendation::Unfavorable
    } else {
        Recommendation::Mixed
    }
}
