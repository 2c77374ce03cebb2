//! QueryKey - Cache Identity Derived From UI State

use crate::constants::QUERY_KEY_SCOPE;
use crate::query::request::PageRequest;
use crate::state::table_state::{ColumnFilter, ColumnSort, PaginationState, TableState};

/// Composite key identifying one cached page.
///
/// Filter modes are deliberately absent: switching between `contains` and
/// `startsWith` does not refetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    scope: &'static str,
    column_filters: Vec<ColumnFilter>,
    global_filter: String,
    page_index: usize,
    page_size: usize,
    sorting: Vec<ColumnSort>,
}

impl QueryKey {
    pub fn from_state(state: &TableState) -> Self {
        let pagination = state.pagination();
        Self {
            scope: QUERY_KEY_SCOPE,
            column_filters: state.column_filters().to_vec(),
            global_filter: state.global_filter().to_string(),
            page_index: pagination.page_index,
            page_size: pagination.page_size,
            sorting: state.sorting().to_vec(),
        }
    }

    /// Request parameters actually sent; filters and sorting stay local
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_pagination(PaginationState {
            page_index: self.page_index,
            page_size: self.page_size,
        })
    }

    pub fn column_filters(&self) -> &[ColumnFilter] {
        &self.column_filters
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn sorting(&self) -> &[ColumnSort] {
        &self.sorting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::table_state::FilterMode;

    #[test]
    fn every_query_input_changes_the_key() {
        let base = TableState::default();
        let key = QueryKey::from_state(&base);

        let mut filtered = base.clone();
        filtered.set_column_filter("title", "a");
        assert_ne!(QueryKey::from_state(&filtered), key);

        let mut searched = base.clone();
        searched.set_global_filter("a");
        assert_ne!(QueryKey::from_state(&searched), key);

        let mut sorted = base.clone();
        sorted.toggle_sort("id");
        assert_ne!(QueryKey::from_state(&sorted), key);

        let mut paged = base.clone();
        paged.set_page_index(1, 100);
        assert_ne!(QueryKey::from_state(&paged), key);

        let mut resized = base.clone();
        resized.set_page_size(20);
        assert_ne!(QueryKey::from_state(&resized), key);
    }

    #[test]
    fn filter_mode_does_not_change_the_key() {
        let base = TableState::default();
        let mut moded = base.clone();
        moded.set_column_filter_mode("title", FilterMode::StartsWith);

        assert_eq!(QueryKey::from_state(&moded), QueryKey::from_state(&base));
    }

    #[test]
    fn filters_and_sorting_are_not_requested() {
        let mut state = TableState::default();
        state.set_column_filter("title", "rust");
        state.toggle_sort("title");
        state.set_page_index(2, 100);

        let request = QueryKey::from_state(&state).page_request();
        assert_eq!(request, PageRequest { start: 20, offset: 10 });
    }
}
