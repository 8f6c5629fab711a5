use crate::core::{Recommender, RecommenderConfig};
use crate::models::Listing;
use std::sync::Arc;
use std::time::Duration;

/// Cache of trained recommenders keyed by the serialized listing snapshot
///
/// Trained indexes are immutable once cached, so concurrent requests
/// share them without locking. Identical snapshots skip retraining.
pub struct IndexCache {
    cache: moka::future::Cache<Vec<u8>, Arc<Recommender>>,
    config: RecommenderConfig,
}

impl IndexCache {
    pub fn new(config: RecommenderConfig, max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, config }
    }

    /// Return a recommender trained on `listings`, reusing a cached one when possible
    pub async fn get_or_train(&self, listings: &[Listing]) -> Arc<Recommender> {
        let key = match snapshot_key(listings) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("Failed to serialize listing snapshot, training uncached: {}", e);
                return Arc::new(self.train(listings));
            }
        };

        if let Some(recommender) = self.cache.get(&key).await {
            tracing::trace!("Index cache hit ({} listings)", listings.len());
            return recommender;
        }

        tracing::trace!("Index cache miss ({} listings)", listings.len());
        let recommender = Arc::new(self.train(listings));
        self.cache.insert(key, recommender.clone()).await;
        recommender
    }

    fn train(&self, listings: &[Listing]) -> Recommender {
        let mut recommender = Recommender::new(self.config);
        recommender.train(listings);
        recommender
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

/// Exact serialized form of a snapshot; equal keys mean equal snapshots
fn snapshot_key(listings: &[Listing]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(listings)
}
