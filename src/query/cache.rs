//! QueryCache - Bounded In-Memory Page Cache
//!
//! Least-recently-used eviction once `capacity` distinct keys are stored.

use std::sync::Arc;

use chrono::{DateTime, Local};
use hashlink::LruCache;

use crate::domain::artigo::ArtigoPage;
use crate::query::key::QueryKey;

/// A cached page and when it was fetched
#[derive(Debug, Clone)]
pub struct CachedPage {
    pub page: Arc<ArtigoPage>,
    pub updated_at: DateTime<Local>,
}

pub struct QueryCache {
    entries: LruCache<QueryKey, CachedPage>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(capacity.max(1)),
        }
    }

    /// Look up a key, marking it as recently used
    pub fn get(&mut self, key: &QueryKey) -> Option<&CachedPage> {
        self.entries.get(key)
    }

    /// Store a page, replacing any previous one for the key
    pub fn insert(&mut self, key: QueryKey, page: Arc<ArtigoPage>) {
        self.entries.insert(
            key,
            CachedPage {
                page,
                updated_at: Local::now(),
            },
        );
    }

    pub fn remove(&mut self, key: &QueryKey) -> Option<CachedPage> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::table_state::TableState;

    fn key_for_page(page_index: usize) -> QueryKey {
        let mut state = TableState::default();
        state.set_page_index(page_index, 1_000);
        QueryKey::from_state(&state)
    }

    fn page(total: u64) -> Arc<ArtigoPage> {
        let mut page = ArtigoPage::default();
        page.meta.total = Some(total);
        Arc::new(page)
    }

    #[test]
    fn insert_then_get() {
        let mut cache = QueryCache::new(4);
        cache.insert(key_for_page(0), page(10));

        let cached = cache.get(&key_for_page(0)).expect("cached");
        assert_eq!(cached.page.total_count(), 10);
        assert!(cache.get(&key_for_page(1)).is_none());
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = QueryCache::new(2);
        cache.insert(key_for_page(0), page(1));
        cache.insert(key_for_page(1), page(2));

        // Touch page 0 so page 1 becomes the eviction candidate
        assert!(cache.get(&key_for_page(0)).is_some());
        cache.insert(key_for_page(2), page(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key_for_page(0)).is_some());
        assert!(cache.get(&key_for_page(1)).is_none());
        assert!(cache.get(&key_for_page(2)).is_some());
    }

    #[test]
    fn remove_drops_only_that_key() {
        let mut cache = QueryCache::new(4);
        assert!(cache.is_empty());
        cache.insert(key_for_page(0), page(1));
        cache.insert(key_for_page(1), page(2));

        assert!(cache.remove(&key_for_page(0)).is_some());
        assert!(cache.remove(&key_for_page(0)).is_none());
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key_for_page(1)).is_some());
    }
}
