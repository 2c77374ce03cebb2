//! ArtigosState - Table State Entity
//!
//! Pairs the user-edited [`TableState`] with the [`QueryObserver`] that
//! tracks what is on screen. Held in a GPUI entity; views observe it.

use std::sync::Arc;

use crate::domain::artigo::ArtigoPage;
use crate::query::{FetchTicket, QueryKey, QueryObserver, QuerySnapshot};
use crate::state::table_state::TableState;

#[derive(Debug, Default)]
pub struct ArtigosState {
    pub table: TableState,
    observer: QueryObserver,
}

impl ArtigosState {
    pub fn new(page_size: usize) -> Self {
        Self {
            table: TableState::new(page_size),
            observer: QueryObserver::new(),
        }
    }

    /// Key for the current table state
    pub fn current_key(&self) -> QueryKey {
        QueryKey::from_state(&self.table)
    }

    /// The current key, when it is not the one already being observed
    pub fn pending_key(&self) -> Option<QueryKey> {
        let key = self.current_key();
        self.observer.needs_fetch(&key).then_some(key)
    }

    /// Key a manual refresh re-issues: the one last fetched, so the request
    /// parameters match the last automatic fetch
    pub fn refresh_key(&self) -> QueryKey {
        self.observer
            .key()
            .cloned()
            .unwrap_or_else(|| self.current_key())
    }

    pub fn begin_fetch(&mut self, key: QueryKey, cached: Option<Arc<ArtigoPage>>) -> FetchTicket {
        self.observer.begin(key, cached)
    }

    pub fn settle_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Arc<ArtigoPage>, Arc<str>>,
    ) -> bool {
        self.observer.settle(ticket, result)
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        self.observer.snapshot()
    }

    /// Total rows as last reported by the backend
    pub fn total_count(&self) -> u64 {
        self.snapshot().total_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::testing::{instant_retry, page_of, ScriptedApi};
    use crate::query::{PageRequest, QueryClient};

    #[test]
    fn pending_key_follows_table_changes() {
        let mut state = ArtigosState::new(10);
        let key = state.pending_key().expect("initial mount fetches");
        state.begin_fetch(key, None);
        assert!(state.pending_key().is_none());

        state.table.set_page_index(1, 100);
        assert!(state.pending_key().is_some());
    }

    #[test]
    fn filter_mode_change_needs_no_fetch() {
        let mut state = ArtigosState::new(10);
        let key = state.current_key();
        state.begin_fetch(key, None);

        state.table.cycle_column_filter_mode(
            "title",
            &[
                crate::state::table_state::FilterMode::Contains,
                crate::state::table_state::FilterMode::StartsWith,
            ],
        );
        assert!(state.pending_key().is_none());
    }

    #[test]
    fn refresh_key_before_any_fetch_is_current_key() {
        let state = ArtigosState::new(10);
        assert_eq!(state.refresh_key(), state.current_key());
    }

    #[tokio::test]
    async fn refresh_repeats_last_automatic_request() {
        let api = ScriptedApi::new(vec![
            Ok(page_of(&[(21, "U")], 42)),
            Ok(page_of(&[(21, "U")], 42)),
            Ok(page_of(&[(21, "U")], 42)),
        ]);
        let client = QueryClient::new(8, instant_retry(0));
        let mut state = ArtigosState::new(10);

        let key = state.pending_key().expect("initial mount fetches");
        let ticket = state.begin_fetch(key.clone(), None);
        let page = client.fetch(&api, &key).await.expect("first page");
        assert!(state.settle_fetch(ticket, Ok(page)));

        // Automatic fetch after paging
        state.table.set_page_index(2, state.total_count());
        let key = state.pending_key().expect("page change fetches");
        let ticket = state.begin_fetch(key.clone(), client.cached(&key));
        let page = client.fetch(&api, &key).await.expect("third page");
        assert!(state.settle_fetch(ticket, Ok(page)));
        assert!(state.pending_key().is_none());

        // Manual refresh
        let key = state.refresh_key();
        let ticket = state.begin_fetch(key.clone(), client.cached(&key));
        let page = client.fetch(&api, &key).await.expect("refreshed page");
        assert!(state.settle_fetch(ticket, Ok(page)));

        let requests = api.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1], PageRequest { start: 20, offset: 10 });
        assert_eq!(requests[2], requests[1]);
    }
}
