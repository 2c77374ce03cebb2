//! QueryObserver - Per-View Query State Machine
//!
//! Tracks which key the view is showing, the data on screen and the fetch
//! lifecycle `Idle → Fetching → Success | Error`. Responses are matched to
//! the fetch that produced them through a [`FetchTicket`]; only the most
//! recent fetch may change what the view shows.

use std::sync::Arc;

use crate::domain::artigo::{Artigo, ArtigoPage};
use crate::query::key::QueryKey;

/// Fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Fetching,
    Success,
    Error,
}

/// Identifies one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// What the display layer needs to render
#[derive(Debug, Clone, Default)]
pub struct QuerySnapshot {
    pub page: Option<Arc<ArtigoPage>>,
    pub phase: QueryPhase,
    pub is_loading: bool,
    pub is_fetching: bool,
    pub is_error: bool,
    pub is_fetched: bool,
    pub is_previous_data: bool,
    pub error: Option<Arc<str>>,
}

impl QuerySnapshot {
    pub fn rows(&self) -> &[Artigo] {
        self.page
            .as_deref()
            .map(|p| p.data.as_slice())
            .unwrap_or_default()
    }

    pub fn total_count(&self) -> u64 {
        self.page.as_deref().map_or(0, ArtigoPage::total_count)
    }

    /// The grid is shown only once a fetch has settled and data exists
    pub fn should_render(&self) -> bool {
        self.is_fetched && self.page.is_some()
    }
}

#[derive(Debug, Default)]
pub struct QueryObserver {
    key: Option<QueryKey>,
    data: Option<Arc<ArtigoPage>>,
    data_key: Option<QueryKey>,
    phase: QueryPhase,
    error: Option<Arc<str>>,
    generation: u64,
    settled: u64,
}

impl QueryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&QueryKey> {
        self.key.as_ref()
    }

    /// Whether `key` differs from the key currently observed
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        self.key.as_ref() != Some(key)
    }

    /// Start fetching `key`.
    ///
    /// Cached data for the key is shown right away; without it the previous
    /// page stays on screen until the response arrives.
    pub fn begin(&mut self, key: QueryKey, cached: Option<Arc<ArtigoPage>>) -> FetchTicket {
        if self.key.as_ref() != Some(&key) {
            // Errors belong to the key that produced them
            self.error = None;
        }
        if let Some(page) = cached {
            self.data = Some(page);
            self.data_key = Some(key.clone());
        }

        self.key = Some(key);
        self.phase = QueryPhase::Fetching;
        self.generation += 1;

        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` and changes nothing when a newer fetch has started since.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        result: Result<Arc<ArtigoPage>, Arc<str>>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.settled += 1;
        match result {
            Ok(page) => {
                self.data = Some(page);
                self.data_key = self.key.clone();
                self.error = None;
                self.phase = QueryPhase::Success;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = QueryPhase::Error;
            }
        }
        true
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        let is_fetching = self.phase == QueryPhase::Fetching;
        QuerySnapshot {
            page: self.data.clone(),
            phase: self.phase,
            is_loading: is_fetching && self.data.is_none(),
            is_fetching,
            is_error: self.error.is_some(),
            is_fetched: self.settled > 0,
            is_previous_data: self.data.is_some() && self.data_key != self.key,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::request::PageRequest;
    use crate::query::testing::page_of;
    use crate::state::table_state::TableState;

    fn key_at(page_index: usize) -> QueryKey {
        let mut state = TableState::default();
        state.set_page_index(page_index, 1_000);
        QueryKey::from_state(&state)
    }

    #[test]
    fn renders_nothing_before_first_settle() {
        let mut observer = QueryObserver::new();
        assert!(!observer.snapshot().should_render());
        assert_eq!(observer.snapshot().phase, QueryPhase::Idle);

        observer.begin(key_at(0), None);
        let snapshot = observer.snapshot();
        assert!(snapshot.is_loading);
        assert!(snapshot.is_fetching);
        assert!(!snapshot.is_fetched);
        assert!(!snapshot.should_render());
    }

    #[test]
    fn success_exposes_rows_and_total() {
        let mut observer = QueryObserver::new();
        let ticket = observer.begin(key_at(0), None);

        assert!(observer.settle(ticket, Ok(Arc::new(page_of(&[(1, "A")], 1)))));

        let snapshot = observer.snapshot();
        assert_eq!(snapshot.phase, QueryPhase::Success);
        assert!(snapshot.should_render());
        assert_eq!(snapshot.rows().len(), 1);
        assert_eq!(snapshot.rows()[0].title, "A");
        assert_eq!(snapshot.total_count(), 1);
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_error);
    }

    #[test]
    fn first_fetch_error_still_renders_nothing() {
        let mut observer = QueryObserver::new();
        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Err(Arc::from("connection refused")));

        let snapshot = observer.snapshot();
        assert!(snapshot.is_error);
        assert!(snapshot.is_fetched);
        assert!(!snapshot.should_render());
    }

    #[test]
    fn error_keeps_previous_rows() {
        let mut observer = QueryObserver::new();
        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Ok(Arc::new(page_of(&[(1, "A")], 11))));

        let ticket = observer.begin(key_at(1), None);
        observer.settle(ticket, Err(Arc::from("boom")));

        let snapshot = observer.snapshot();
        assert!(snapshot.is_error);
        assert_eq!(snapshot.error.as_deref(), Some("boom"));
        assert!(snapshot.should_render());
        assert_eq!(snapshot.rows()[0].id, 1);
        assert!(snapshot.is_previous_data);
    }

    #[test]
    fn keeps_previous_data_while_fetching_new_key() {
        let mut observer = QueryObserver::new();
        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Ok(Arc::new(page_of(&[(1, "A")], 20))));

        observer.begin(key_at(1), None);
        let snapshot = observer.snapshot();
        assert!(snapshot.is_fetching);
        assert!(!snapshot.is_loading);
        assert!(snapshot.is_previous_data);
        assert_eq!(snapshot.rows()[0].id, 1);
    }

    #[test]
    fn cached_data_is_shown_immediately() {
        let mut observer = QueryObserver::new();
        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Ok(Arc::new(page_of(&[(1, "A")], 20))));

        observer.begin(key_at(1), Some(Arc::new(page_of(&[(11, "K")], 20))));
        let snapshot = observer.snapshot();
        assert!(snapshot.is_fetching);
        assert!(!snapshot.is_previous_data);
        assert_eq!(snapshot.rows()[0].id, 11);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut observer = QueryObserver::new();
        let first = observer.begin(key_at(0), None);
        let second = observer.begin(key_at(1), None);

        assert!(!observer.settle(first, Ok(Arc::new(page_of(&[(1, "old")], 20)))));
        assert!(observer.snapshot().page.is_none());

        assert!(observer.settle(second, Ok(Arc::new(page_of(&[(11, "new")], 20)))));
        assert_eq!(observer.snapshot().rows()[0].id, 11);
    }

    #[test]
    fn refetch_keeps_error_until_success() {
        let mut observer = QueryObserver::new();
        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Ok(Arc::new(page_of(&[(1, "A")], 1))));
        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Err(Arc::from("boom")));

        observer.begin(key_at(0), None);
        assert!(observer.snapshot().is_error);
        assert!(observer.snapshot().is_fetching);

        let ticket = observer.begin(key_at(0), None);
        observer.settle(ticket, Ok(Arc::new(page_of(&[(1, "A")], 1))));
        assert!(!observer.snapshot().is_error);
    }

    #[test]
    fn tracks_observed_key() {
        let mut observer = QueryObserver::new();
        assert!(observer.needs_fetch(&key_at(2)));

        observer.begin(key_at(2), None);
        assert!(!observer.needs_fetch(&key_at(2)));
        assert_eq!(
            observer.key().map(QueryKey::page_request),
            Some(PageRequest { start: 20, offset: 10 })
        );
    }
}
