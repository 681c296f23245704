/// App directory provider abstraction
///
/// This module decouples the pipeline from any particular app-market data
/// source. A provider exposes the two operations the pipeline needs: fetch
/// listing metadata for an app in one region catalog, and fetch a bounded
/// batch of reviews for it. Either call may fail per-region; retry policy
/// lives in the lookup and review services, not here.
use crate::{
    error::AppResult,
    models::{AppMetadata, RegionCode, Review},
};

pub mod play_market;

pub use play_market::PlayMarketProvider;

/// Trait for app directory data sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AppDirectoryProvider: Send + Sync {
    /// Fetch listing metadata for an app in one region's catalog
    ///
    /// Fails when the catalog has no listing for the app or the upstream
    /// call errors; callers treat both the same way.
    async fn app_details(&self, app_id: &str, region: RegionCode) -> AppResult<AppMetadata>;

    /// Fetch up to `count` reviews for an app in one region's catalog
    ///
    /// Ordering is whatever the source returns, assumed reverse-chronological
    /// but not enforced. No pagination beyond the single capped request.
    async fn reviews(
        &self,
        app_id: &str,
        region: RegionCode,
        count: usize,
    ) -> AppResult<Vec<Review>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
