use std::sync::Arc;

use crate::services::{providers::AppDirectoryProvider, SentimentClassifier};

/// Shared application state
///
/// Holds the directory provider and the classifier. Both are immutable after
/// startup; every query builds its own transient result set, so no locking
/// is needed.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn AppDirectoryProvider>,
    pub classifier: Arc<SentimentClassifier>,
}

impl AppState {
    pub fn new(provider: Arc<dyn AppDirectoryProvider>) -> Self {
        Self {
            provider,
            classifier: Arc::new(SentimentClassifier::new()),
        }
    }
}
