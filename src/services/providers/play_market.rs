/// Play market data provider (via RapidAPI)
///
/// Wraps a hosted app-market scraping API behind the AppDirectoryProvider
/// trait. Two endpoints are used:
/// 1. App details: /apps/{app_id}?country={region}
/// 2. Reviews: /apps/{app_id}/reviews?country={region}&count={count}
use crate::{
    error::{AppError, AppResult},
    models::{ApiAppDetails, ApiReview, AppMetadata, RegionCode, Review},
    services::providers::AppDirectoryProvider,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;

const REVIEW_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct ApiReviewsResponse {
    #[serde(default)]
    reviews: Vec<ApiReview>,
}

#[derive(Clone)]
pub struct PlayMarketProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl PlayMarketProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl AppDirectoryProvider for PlayMarketProvider {
    async fn app_details(&self, app_id: &str, region: RegionCode) -> AppResult<AppMetadata> {
        let url = format!("{}/apps/{}", self.api_url, app_id);
        let response = self
            .http_client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .query(&[("country", region.as_str()), ("lang", REVIEW_LANGUAGE)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Market API returned status {}: {}",
                status, body
            )));
        }

        let details: ApiAppDetails = response.json().await?;
        let metadata = AppMetadata::from(details);

        tracing::info!(
            app_id = %app_id,
            region = %region,
            title = %metadata.title,
            provider = "play_market",
            "App details fetched"
        );

        Ok(metadata)
    }

    async fn reviews(
        &self,
        app_id: &str,
        region: RegionCode,
        count: usize,
    ) -> AppResult<Vec<Review>> {
        let url = format!("{}/apps/{}/reviews", self.api_url, app_id);
        let response = self
            .http_client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .query(&[
                ("country", region.as_str()),
                ("lang", REVIEW_LANGUAGE),
                ("count", &count.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Market API returned status {}: {}",
                status, body
            )));
        }

        let body: ApiReviewsResponse = response.json().await?;
        let reviews: Vec<Review> = body.reviews.into_iter().map(Review::from).collect();

        tracing::info!(
            app_id = %app_id,
            region = %region,
            requested = count,
            received = reviews.len(),
            provider = "play_market",
            "Reviews fetched"
        );

        Ok(reviews)
    }

    fn name(&self) -> &'static str {
        "play_market"
    }
}
