//! Caching layer for timing-suggestion replies.
//!
//! The engine asks the suggestion service once per POI per build, but
//! interactive sessions rebuild the same trip repeatedly (tweaking
//! party size, re-optimizing). Replies depend only on the POI and the
//! day's sun times, so they cache well. Keyed by (poi name, sunrise);
//! weather changes within a forecast day are below the noise floor of
//! the advice.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::suggest::{SuggestError, TimingReply, TimingRequest, TimingSuggester};

/// Cache key: (poi name, sunrise string).
///
/// The sunrise string folds in the date and latitude without needing
/// them passed separately; two days with identical sun times get the
/// same advice anyway.
type ReplyKey = (String, String);

/// Configuration for the suggestion cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached replies.
    pub ttl: Duration,

    /// Maximum number of cached replies.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15 * 60),
            max_capacity: 2000,
        }
    }
}

/// A timing suggester with caching.
///
/// Wraps any `TimingSuggester` and caches successful replies. Errors
/// are not cached: a transient outage should not pin the fallback
/// path for the TTL.
pub struct CachedSuggester<S> {
    inner: S,
    replies: MokaCache<ReplyKey, Arc<TimingReply>>,
}

impl<S: TimingSuggester> CachedSuggester<S> {
    /// Wrap a suggester with a cache.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let replies = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        Self { inner, replies }
    }

    /// Number of cached replies (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.replies.entry_count()
    }

    /// Drop all cached replies.
    pub fn invalidate_all(&self) {
        self.replies.invalidate_all();
    }
}

impl<S: TimingSuggester> TimingSuggester for CachedSuggester<S> {
    async fn suggest_timing(&self, request: &TimingRequest) -> Result<TimingReply, SuggestError> {
        let key = (request.poi_name.clone(), request.sunrise.clone());

        if let Some(cached) = self.replies.get(&key).await {
            return Ok((*cached).clone());
        }

        let reply = self.inner.suggest_timing(request).await?;
        self.replies.insert(key, Arc::new(reply.clone())).await;
        Ok(reply)
    }
}
