use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{AggregateResult, AppMetadata, RegionCode, Review};
use crate::services;

use super::AppState;

/// Number of raw reviews returned as a sample alongside the aggregate
const SAMPLE_REVIEW_COUNT: usize = 10;

// Response types

#[derive(Debug, Serialize)]
pub struct AppLookupResponse {
    pub app: AppMetadata,
    pub region: RegionCode,
}

/// Everything a presentation layer needs to render one query: metadata,
/// chart data (the sentiment counts), the verdict, and sample reviews.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub app: AppMetadata,
    pub region: RegionCode,
    pub sentiment: AggregateResult,
    pub sample_reviews: Vec<Review>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Resolve an app identifier to its metadata and winning region
pub async fn get_app(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> AppResult<Json<AppLookupResponse>> {
    let (app, region) = services::resolve_app(state.provider.as_ref(), &app_id).await?;
    Ok(Json(AppLookupResponse { app, region }))
}

/// Run the full pipeline for one app: resolve, fetch reviews, classify,
/// aggregate
pub async fn analyze_app(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> AppResult<Json<AnalysisResponse>> {
    let (app, region) = services::resolve_app(state.provider.as_ref(), &app_id).await?;

    let reviews = services::fetch_reviews(
        state.provider.as_ref(),
        &app_id,
        region,
        services::DEFAULT_REVIEW_COUNT,
    )
    .await?;

    let sentiment = services::aggregate(&state.classifier, &reviews);
    let sample_reviews: Vec<Review> =
        reviews.iter().take(SAMPLE_REVIEW_COUNT).cloned().collect();

    Ok(Json(AnalysisResponse {
        app,
        region,
        sentiment,
        sample_reviews,
    }))
}
