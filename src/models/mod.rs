use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Region catalogs in lookup priority order
///
/// App Lookup walks this list front to back and stops at the first catalog
/// that carries a listing for the requested app. Declaration order is the
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionCode {
    Us,
    Gb,
    Ca,
    Au,
    In,
    De,
    Fr,
    Jp,
}

impl RegionCode {
    /// Lookup priority order. First success wins.
    pub const PRIORITY: [RegionCode; 8] = [
        RegionCode::Us,
        RegionCode::Gb,
        RegionCode::Ca,
        RegionCode::Au,
        RegionCode::In,
        RegionCode::De,
        RegionCode::Fr,
        RegionCode::Jp,
    ];

    /// Two-letter country code as sent to the directory API
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionCode::Us => "us",
            RegionCode::Gb => "gb",
            RegionCode::Ca => "ca",
            RegionCode::Au => "au",
            RegionCode::In => "in",
            RegionCode::De => "de",
            RegionCode::Fr => "fr",
            RegionCode::Jp => "jp",
        }
    }
}

impl Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// App store listing metadata for one region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppMetadata {
    pub title: String,
    pub developer: String,
    pub rating_score: f64,
    /// Approximate install count as reported by the store (e.g. "5,000,000,000+")
    pub installs: String,
    pub icon_url: String,
    pub description: String,
}

/// A single user review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub content: String,
    pub author: Option<String>,
    /// Star rating attached by the reviewer, when the store provides one.
    /// Not consulted by the classifier; sentiment comes from the text alone.
    pub stars: Option<u8>,
    pub posted_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: None,
            stars: None,
            posted_at: None,
        }
    }
}

/// Sentiment label assigned to one review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A review paired with its classification
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedReview {
    pub review: Review,
    pub sentiment: Sentiment,
    /// Raw polarity in [-1.0, 1.0] that produced the label
    pub polarity: f64,
}

/// Overall verdict derived from the sentiment distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Favorable,
    Mixed,
    Unfavorable,
}

/// Sentiment tallies and the derived recommendation for one review batch
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateResult {
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub total: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub recommendation: Recommendation,
}

// ============================================================================
// App Market API Types
// ============================================================================

/// Raw app details response from the app market API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAppDetails {
    pub title: String,
    pub developer: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub installs: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ApiAppDetails> for AppMetadata {
    fn from(details: ApiAppDetails) -> Self {
        AppMetadata {
            title: details.title,
            developer: details.developer,
            rating_score: details.score.unwrap_or(0.0),
            installs: details.installs.unwrap_or_default(),
            icon_url: details.icon.unwrap_or_default(),
            description: details.description.unwrap_or_default(),
        }
    }
}

/// Raw review record from the app market API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReview {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

impl From<ApiReview> for Review {
    fn from(api: ApiReview) -> Self {
        Review {
            content: api.content.unwrap_or_default(),
            author: api.user_name,
            stars: api.score,
            posted_at: api.at,
        }
    }
}
