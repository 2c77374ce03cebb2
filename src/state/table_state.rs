//! TableState - User-Controlled Table Parameters
//!
//! Filters, sorting and pagination as edited through the grid. Every change
//! that matters to the backend shows up in the derived query key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::DEFAULT_PAGE_SIZE;

/// How a column filter value is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    Contains,
    StartsWith,
}

impl FilterMode {
    /// Translation key for the mode label
    pub fn label_key(&self) -> &'static str {
        match self {
            FilterMode::Contains => "filter-mode-contains",
            FilterMode::StartsWith => "filter-mode-starts-with",
        }
    }

    /// Local match used only for display hints; the backend receives no filters
    pub fn matches(&self, haystack: &str, needle: &str) -> bool {
        let haystack = haystack.to_lowercase();
        let needle = needle.to_lowercase();
        match self {
            FilterMode::Contains => haystack.contains(&needle),
            FilterMode::StartsWith => haystack.starts_with(&needle),
        }
    }
}

/// A single active column filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnFilter {
    pub id: String,
    pub value: String,
}

/// A single sort entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

/// Current page position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    /// Number of pages for a collection of `total` rows (never less than one)
    pub fn page_count(&self, total: u64) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        let pages = total.div_ceil(self.page_size as u64) as usize;
        pages.max(1)
    }

    /// Zero-based offset of the first row on the current page
    pub fn start(&self) -> usize {
        self.page_index * self.page_size
    }

    /// One-based inclusive range of rows shown, for the footer label
    pub fn visible_range(&self, total: u64) -> (u64, u64) {
        if total == 0 {
            return (0, 0);
        }
        let first = (self.start() as u64 + 1).min(total);
        let last = (self.start() as u64 + self.page_size as u64).min(total);
        (first, last)
    }
}

/// All UI state that feeds the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    column_filters: Vec<ColumnFilter>,
    column_filter_fns: BTreeMap<String, FilterMode>,
    global_filter: String,
    sorting: Vec<ColumnSort>,
    pagination: PaginationState,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Create the initial state; the title column filters with `contains`
    pub fn new(page_size: usize) -> Self {
        let mut column_filter_fns = BTreeMap::new();
        column_filter_fns.insert("title".to_string(), FilterMode::Contains);

        Self {
            column_filters: Vec::new(),
            column_filter_fns,
            global_filter: String::new(),
            sorting: Vec::new(),
            pagination: PaginationState {
                page_index: 0,
                page_size: page_size.max(1),
            },
        }
    }

    // ==================== Getters ====================

    pub fn column_filters(&self) -> &[ColumnFilter] {
        &self.column_filters
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn sorting(&self) -> &[ColumnSort] {
        &self.sorting
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Current filter value for a column, empty when unfiltered
    pub fn column_filter(&self, id: &str) -> &str {
        self.column_filters
            .iter()
            .find(|f| f.id == id)
            .map_or("", |f| f.value.as_str())
    }

    /// Filter mode for a column, if the column supports modes
    pub fn column_filter_mode(&self, id: &str) -> Option<FilterMode> {
        self.column_filter_fns.get(id).copied()
    }

    /// Sort direction for a column: `None` unsorted, `Some(true)` descending
    pub fn sort_direction(&self, id: &str) -> Option<bool> {
        self.sorting.iter().find(|s| s.id == id).map(|s| s.desc)
    }

    // ==================== Setters ====================

    /// Set a column filter; an empty value removes it
    pub fn set_column_filter(&mut self, id: &str, value: impl Into<String>) {
        let value = value.into();
        let existing = self.column_filters.iter().position(|f| f.id == id);

        match (existing, value.is_empty()) {
            (Some(index), true) => {
                self.column_filters.remove(index);
            }
            (Some(index), false) => self.column_filters[index].value = value,
            (None, true) => {}
            (None, false) => self.column_filters.push(ColumnFilter {
                id: id.to_string(),
                value,
            }),
        }
    }

    /// Set the filter mode of a column
    pub fn set_column_filter_mode(&mut self, id: &str, mode: FilterMode) {
        self.column_filter_fns.insert(id.to_string(), mode);
    }

    /// Advance a column to the next of its allowed modes.
    ///
    /// Returns the new mode, or `None` when `allowed` is empty.
    pub fn cycle_column_filter_mode(&mut self, id: &str, allowed: &[FilterMode]) -> Option<FilterMode> {
        let current = self.column_filter_mode(id);
        let next = match current.and_then(|m| allowed.iter().position(|a| *a == m)) {
            Some(pos) => allowed[(pos + 1) % allowed.len()],
            None => *allowed.first()?,
        };
        self.set_column_filter_mode(id, next);
        Some(next)
    }

    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        self.global_filter = value.into();
    }

    /// Cycle a column through ascending, descending and unsorted.
    ///
    /// Sorting is single-column: toggling one column clears the others.
    pub fn toggle_sort(&mut self, id: &str) {
        let next = match self.sort_direction(id) {
            None => Some(false),
            Some(false) => Some(true),
            Some(true) => None,
        };

        self.sorting.clear();
        if let Some(desc) = next {
            self.sorting.push(ColumnSort {
                id: id.to_string(),
                desc,
            });
        }
    }

    /// Jump to a page, clamped to the known page count
    pub fn set_page_index(&mut self, page_index: usize, total: u64) {
        let last = self.pagination.page_count(total) - 1;
        self.pagination.page_index = page_index.min(last);
    }

    /// Change rows per page, keeping the first visible row on screen
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let top_row = self.pagination.start();
        self.pagination = PaginationState {
            page_index: top_row / page_size,
            page_size,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_mount() {
        let state = TableState::default();
        assert!(state.column_filters().is_empty());
        assert_eq!(state.column_filter_mode("title"), Some(FilterMode::Contains));
        assert_eq!(state.column_filter_mode("id"), None);
        assert_eq!(state.global_filter(), "");
        assert!(state.sorting().is_empty());
        assert_eq!(state.pagination(), PaginationState {
            page_index: 0,
            page_size: 10
        });
    }

    #[test]
    fn empty_filter_value_removes_the_filter() {
        let mut state = TableState::default();
        state.set_column_filter("title", "rust");
        state.set_column_filter("id", "4");
        assert_eq!(state.column_filter("title"), "rust");
        assert_eq!(state.column_filters().len(), 2);

        state.set_column_filter("title", "rusty");
        assert_eq!(state.column_filter("title"), "rusty");
        assert_eq!(state.column_filters().len(), 2);

        state.set_column_filter("title", "");
        assert_eq!(state.column_filter("title"), "");
        assert_eq!(state.column_filters().len(), 1);
    }

    #[test]
    fn filter_mode_cycles_within_allowed() {
        let mut state = TableState::default();
        let allowed = [FilterMode::Contains, FilterMode::StartsWith];

        assert_eq!(
            state.cycle_column_filter_mode("title", &allowed),
            Some(FilterMode::StartsWith)
        );
        assert_eq!(
            state.cycle_column_filter_mode("title", &allowed),
            Some(FilterMode::Contains)
        );
        assert_eq!(state.cycle_column_filter_mode("id", &[]), None);
    }

    #[test]
    fn sort_cycles_asc_desc_none() {
        let mut state = TableState::default();

        state.toggle_sort("title");
        assert_eq!(state.sort_direction("title"), Some(false));
        state.toggle_sort("title");
        assert_eq!(state.sort_direction("title"), Some(true));
        state.toggle_sort("title");
        assert_eq!(state.sort_direction("title"), None);
        assert!(state.sorting().is_empty());
    }

    #[test]
    fn sorting_another_column_replaces_the_sort() {
        let mut state = TableState::default();
        state.toggle_sort("title");
        state.toggle_sort("id");

        assert_eq!(state.sorting().len(), 1);
        assert_eq!(state.sort_direction("id"), Some(false));
        assert_eq!(state.sort_direction("title"), None);
    }

    #[test]
    fn page_index_is_clamped_to_page_count() {
        let mut state = TableState::default();
        state.set_page_index(7, 35);
        assert_eq!(state.pagination().page_index, 3);

        state.set_page_index(4, 35);
        assert_eq!(state.pagination().page_index, 3);

        state.set_page_index(0, 35);
        assert_eq!(state.pagination().page_index, 0);
    }

    #[test]
    fn page_size_change_keeps_top_row() {
        let mut state = TableState::default();
        state.set_page_index(4, 1000);
        assert_eq!(state.pagination().start(), 40);

        state.set_page_size(20);
        assert_eq!(state.pagination(), PaginationState {
            page_index: 2,
            page_size: 20
        });

        state.set_page_size(50);
        assert_eq!(state.pagination().page_index, 0);
    }

    #[test]
    fn page_count_and_visible_range() {
        let pagination = PaginationState {
            page_index: 2,
            page_size: 10,
        };
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(21), 3);
        assert_eq!(pagination.visible_range(25), (21, 25));
        assert_eq!(pagination.visible_range(0), (0, 0));
    }

    #[test]
    fn filter_modes_match_case_insensitively() {
        assert!(FilterMode::Contains.matches("Introdução ao Rust", "rust"));
        assert!(FilterMode::StartsWith.matches("Introdução ao Rust", "intro"));
        assert!(!FilterMode::StartsWith.matches("Introdução ao Rust", "rust"));
    }
}
