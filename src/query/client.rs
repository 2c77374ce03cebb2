//! QueryClient - Shared Fetch-and-Cache Handle
//!
//! One client is created at startup and handed to every view that needs it.
//! Clones share the same cache.

use std::sync::Arc;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use crate::domain::artigo::ArtigoPage;
use crate::error::Result;
use crate::query::cache::QueryCache;
use crate::query::key::QueryKey;
use crate::query::retry::RetryPolicy;
use crate::services::ArtigosApi;

#[derive(Clone)]
pub struct QueryClient {
    cache: Arc<Mutex<QueryCache>>,
    retry: RetryPolicy,
}

impl QueryClient {
    pub fn new(capacity: usize, retry: RetryPolicy) -> Self {
        Self {
            cache: Arc::new(Mutex::new(QueryCache::new(capacity))),
            retry,
        }
    }

    /// Cached page for a key, if any
    pub fn cached(&self, key: &QueryKey) -> Option<Arc<ArtigoPage>> {
        self.cache.lock().get(key).map(|entry| entry.page.clone())
    }

    fn store(&self, key: QueryKey, page: Arc<ArtigoPage>) {
        self.cache.lock().insert(key, page);
    }

    /// When the cached page for a key was fetched
    pub fn updated_at(&self, key: &QueryKey) -> Option<DateTime<Local>> {
        self.cache.lock().get(key).map(|entry| entry.updated_at)
    }

    /// Drop the cached page for a key
    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.lock().remove(key);
    }

    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Fetch the page for `key`, retrying per the policy, and cache the result
    pub async fn fetch(&self, api: &dyn ArtigosApi, key: &QueryKey) -> Result<Arc<ArtigoPage>> {
        let request = key.page_request();
        let mut retry = 0;

        loop {
            match api.fetch_page(request).await {
                Ok(page) => {
                    page.validate();
                    let page = Arc::new(page);
                    self.store(key.clone(), page.clone());
                    return Ok(page);
                }
                Err(e) => {
                    let delay = if e.is_retryable() {
                        self.retry.delay_for(retry)
                    } else {
                        None
                    };

                    let Some(delay) = delay else {
                        tracing::error!(
                            error = %e,
                            start = request.start,
                            offset = request.offset,
                            attempts = retry + 1,
                            "Fetching artigos failed"
                        );
                        return Err(e);
                    };

                    tracing::warn!(
                        error = %e,
                        retry = retry + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Fetching artigos failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
            }
        }
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("cached", &self.cached_len())
            .field("retry", &self.retry)
            .finish()
    }
}
