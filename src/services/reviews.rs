use crate::{
    error::{AppError, AppResult},
    models::{RegionCode, Review},
    services::providers::AppDirectoryProvider,
};

/// Review count requested on the first attempt
pub const DEFAULT_REVIEW_COUNT: usize = 200;

/// Reduced count used for the single retry after a failed first attempt
pub const FALLBACK_REVIEW_COUNT: usize = 50;

/// Fetch a bounded batch of reviews for a resolved app/region
///
/// One attempt at `count`, then one retry at the fixed fallback count. If
/// the fallback also fails the query fails hard; this is the one spot in
/// the pipeline that is not converted into an empty result.
pub async fn fetch_reviews(
    provider: &dyn AppDirectoryProvider,
    app_id: &str,
    region: RegionCode,
    count: usize,
) -> AppResult<Vec<Review>> {
    match provider.reviews(app_id, region, count).await {
        Ok(reviews) => Ok(reviews),
        Err(primary_err) => {
            tracing::warn!(
                app_id = %app_id,
                region = %region,
                requested = count,
                fallback = FALLBACK_REVIEW_COUNT,
                error = %primary_err,
                "Primary review fetch failed, retrying at fallback count"
            );

            provider
                .reviews(app_id, region, FALLBACK_REVIEW_COUNT)
                .await
                .map_err(|fallback_err| {
                    AppError::FetchFailed(format!(
                        "both attempts failed for {}: {}",
                        app_id, fallback_err
                    ))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockAppDirectoryProvider;
    use mockall::predicate::{always, eq};

    fn batch(n: usize) -> Vec<Review> {
        (0..n).map(|i| Review::from_text(format!("review {i}"))).collect()
    }

    #[tokio::test]
    async fn test_fetch_primary_success() {
        let mut provider = MockAppDirectoryProvider::new();
        provider
            .expect_reviews()
            .with(always(), always(), eq(DEFAULT_REVIEW_COUNT))
            .times(1)
            .returning(|_, _, n| Ok(batch(n)));

        let reviews = fetch_reviews(&provider, "com.whatsapp", RegionCode::Us, DEFAULT_REVIEW_COUNT)
            .await
            .unwrap();
        assert_eq!(reviews.len(), 200);
    }

    #[tokio::test]
    async fn test_fetch_falls_back_to_reduced_count() {
        let mut provider = MockAppDirectoryProvider::new();
        provider
            .expect_reviews()
            .with(always(), always(), eq(DEFAULT_REVIEW_COUNT))
            .times(1)
            .returning(|_, _, _| Err(AppError::ExternalApi("timeout".to_string())));
        provider
            .expect_reviews()
            .with(always(), always(), eq(FALLBACK_REVIEW_COUNT))
            .times(1)
            .returning(|_, _, n| Ok(batch(n)));

        let reviews = fetch_reviews(&provider, "com.whatsapp", RegionCode::Us, DEFAULT_REVIEW_COUNT)
            .await
            .unwrap();
        assert_eq!(reviews.len(), 50);
    }

    #[tokio::test]
    async fn test_fetch_both_attempts_fail_is_hard_failure() {
        let mut provider = MockAppDirectoryProvider::new();
        provider
            .expect_reviews()
            .times(2)
            .returning(|_, _, _| Err(AppError::ExternalApi("down".to_string())));

        let result =
            fetch_reviews(&provider, "com.whatsapp", RegionCode::Us, DEFAULT_REVIEW_COUNT).await;
        assert!(matches!(result, Err(AppError::FetchFailed(_))));
    }
}
