use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use review_radar::api::{create_router, AppState};
use review_radar::error::{AppError, AppResult};
use review_radar::models::{AppMetadata, RegionCode, Review};
use review_radar::services::providers::AppDirectoryProvider;
use review_radar::services::{DEFAULT_REVIEW_COUNT, FALLBACK_REVIEW_COUNT};

/// How the stub answers review requests
#[derive(Clone, Copy)]
enum ReviewBehavior {
    /// Return `count` reviews with a 15:2:3 positive/neutral/negative mix per 20
    Succeed,
    /// Fail the full-count request, succeed at the fallback count
    FailPrimary,
    /// Fail every request
    FailAll,
}

/// In-memory directory provider for exercising the router without a network
struct StubProvider {
    /// Region whose catalog carries the listing, if any
    listing_region: Option<RegionCode>,
    review_behavior: ReviewBehavior,
    queried_regions: Arc<Mutex<Vec<RegionCode>>>,
}

impl StubProvider {
    fn new(listing_region: Option<RegionCode>, review_behavior: ReviewBehavior) -> Self {
        Self {
            listing_region,
            review_behavior,
            queried_regions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn metadata() -> AppMetadata {
        AppMetadata {
            title: "WhatsApp Messenger".to_string(),
            developer: "WhatsApp LLC".to_string(),
            rating_score: 4.3,
            installs: "5,000,000,000+".to_string(),
            icon_url: "https://example.com/icon.png".to_string(),
            description: "Messaging".to_string(),
        }
    }

    fn review_batch(count: usize) -> Vec<Review> {
        (0..count)
            .map(|i| {
                let text = match i % 20 {
                    0..=14 => "Great app, love it",
                    15 | 16 => "It shows my messages on screen",
                    _ => "Terrible, crashes constantly",
                };
                Review::from_text(text)
            })
            .collect()
    }
}

#[async_trait]
impl AppDirectoryProvider for StubProvider {
    async fn app_details(&self, _app_id: &str, region: RegionCode) -> AppResult<AppMetadata> {
        self.queried_regions.lock().unwrap().push(region);
        if self.listing_region == Some(region) {
            Ok(Self::metadata())
        } else {
            Err(AppError::ExternalApi("no listing in catalog".to_string()))
        }
    }

    async fn reviews(
        &self,
        _app_id: &str,
        _region: RegionCode,
        count: usize,
    ) -> AppResult<Vec<Review>> {
        match self.review_behavior {
            ReviewBehavior::Succeed => Ok(Self::review_batch(count)),
            ReviewBehavior::FailPrimary if count == DEFAULT_REVIEW_COUNT => {
                Err(AppError::ExternalApi("timeout".to_string()))
            }
            ReviewBehavior::FailPrimary => Ok(Self::review_batch(count)),
            ReviewBehavior::FailAll => Err(AppError::ExternalApi("service down".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn create_test_server(provider: StubProvider) -> (TestServer, Arc<Mutex<Vec<RegionCode>>>) {
    let queried = provider.queried_regions.clone();
    let state = AppState::new(Arc::new(provider));
    let app = create_router(state);
    (TestServer::new(app).unwrap(), queried)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) =
        create_test_server(StubProvider::new(Some(RegionCode::Us), ReviewBehavior::Succeed));
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_lookup_returns_metadata_and_region() {
    let (server, _) =
        create_test_server(StubProvider::new(Some(RegionCode::Us), ReviewBehavior::Succeed));

    let response = server.get("/apps/com.whatsapp").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["app"]["title"], "WhatsApp Messenger");
    assert_eq!(body["app"]["developer"], "WhatsApp LLC");
    assert_eq!(body["region"], "us");
}

#[tokio::test]
async fn test_lookup_stops_at_first_successful_region() {
    let (server, queried) =
        create_test_server(StubProvider::new(Some(RegionCode::Ca), ReviewBehavior::Succeed));

    let response = server.get("/apps/com.example").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["region"], "ca");

    // us and gb were tried and skipped; nothing after ca was consulted
    let regions = queried.lock().unwrap().clone();
    assert_eq!(
        regions,
        vec![RegionCode::Us, RegionCode::Gb, RegionCode::Ca]
    );
}

#[tokio::test]
async fn test_lookup_exhausted_is_404() {
    let (server, queried) = create_test_server(StubProvider::new(None, ReviewBehavior::Succeed));

    let response = server.get("/apps/com.nowhere").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("com.nowhere"));

    // Every region in the priority list was attempted before giving up
    assert_eq!(queried.lock().unwrap().len(), RegionCode::PRIORITY.len());
}

#[tokio::test]
async fn test_analysis_full_pipeline() {
    let (server, _) =
        create_test_server(StubProvider::new(Some(RegionCode::Us), ReviewBehavior::Succeed));

    let response = server.get("/apps/com.whatsapp/analysis").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["app"]["title"], "WhatsApp Messenger");
    assert_eq!(body["region"], "us");

    // 200 reviews in a 15:2:3 mix per 20 -> 150 positive, 20 neutral, 30 negative
    let sentiment = &body["sentiment"];
    assert_eq!(sentiment["total"], 200);
    assert_eq!(sentiment["positive_count"], 150);
    assert_eq!(sentiment["neutral_count"], 20);
    assert_eq!(sentiment["negative_count"], 30);
    assert_eq!(sentiment["positive_ratio"], 0.75);
    assert_eq!(sentiment["recommendation"], "favorable");

    // first 10 raw reviews come back as the sample
    assert_eq!(body["sample_reviews"].as_array().unwrap().len(), 10);
    assert_eq!(body["sample_reviews"][0]["content"], "Great app, love it");
}

#[tokio::test]
async fn test_analysis_uses_fallback_count() {
    let (server, _) = create_test_server(StubProvider::new(
        Some(RegionCode::Us),
        ReviewBehavior::FailPrimary,
    ));

    let response = server.get("/apps/com.whatsapp/analysis").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["sentiment"]["total"], FALLBACK_REVIEW_COUNT);
}

#[tokio::test]
async fn test_analysis_fetch_failure_is_502() {
    let (server, _) =
        create_test_server(StubProvider::new(Some(RegionCode::Us), ReviewBehavior::FailAll));

    let response = server.get("/apps/com.whatsapp/analysis").await;
    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("com.whatsapp"));
}

#[tokio::test]
async fn test_request_id_header_is_echoed() {
    let (server, _) =
        create_test_server(StubProvider::new(Some(RegionCode::Us), ReviewBehavior::Succeed));

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static("test-query-1"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), "test-query-1");
}
