use crate::{
    error::{AppError, AppResult},
    models::{AppMetadata, RegionCode},
    services::providers::AppDirectoryProvider,
};

/// Outcome of one region attempt during lookup
///
/// Per-region failures are not errors; they are recorded as Skip so the
/// loop's behavior stays observable in tests instead of being silently
/// discarded.
#[derive(Debug)]
pub enum RegionOutcome {
    Found(AppMetadata),
    Skip(String),
}

/// Resolve an app identifier against the region catalogs in priority order
///
/// The first region that yields a listing wins; later regions are never
/// consulted, even if they would carry richer metadata. Every per-region
/// failure (not found, transient fault) means "try the next region"; only
/// exhausting the whole list surfaces as LookupExhausted.
pub async fn resolve_app(
    provider: &dyn AppDirectoryProvider,
    app_id: &str,
) -> AppResult<(AppMetadata, RegionCode)> {
    if app_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "App identifier cannot be empty".to_string(),
        ));
    }

    for region in RegionCode::PRIORITY {
        match try_region(provider, app_id, region).await {
            RegionOutcome::Found(metadata) => {
                tracing::info!(
                    app_id = %app_id,
                    region = %region,
                    title = %metadata.title,
                    "App resolved"
                );
                return Ok((metadata, region));
            }
            RegionOutcome::Skip(reason) => {
                tracing::debug!(
                    app_id = %app_id,
                    region = %region,
                    reason = %reason,
                    "Region skipped"
                );
            }
        }
    }

    Err(AppError::LookupExhausted(app_id.to_string()))
}

async fn try_region(
    provider: &dyn AppDirectoryProvider,
    app_id: &str,
    region: RegionCode,
) -> RegionOutcome {
    match provider.app_details(app_id, region).await {
        Ok(metadata) => RegionOutcome::Found(metadata),
        Err(e) => RegionOutcome::Skip(e.to_string()),
    }
}
