//! Artigos Controller
//!
//! Applies grid edits to the table state and keeps the query in step with it.

use std::sync::Arc;

use chrono::{DateTime, Local};
use gpui::{App, AsyncApp, Entity};
use tracing::{debug, info};

use crate::query::{QueryClient, QueryKey};
use crate::services::{run_in_tokio, ArtigosApi};
use crate::state::artigos_state::ArtigosState;
use crate::state::table_state::{FilterMode, TableState};

/// Artigos page controller
pub struct ArtigosController {
    state: Entity<ArtigosState>,
    client: QueryClient,
    api: Arc<dyn ArtigosApi>,
}

impl ArtigosController {
    /// Create a new controller
    pub fn new(state: Entity<ArtigosState>, client: QueryClient, api: Arc<dyn ArtigosApi>) -> Self {
        Self { state, client, api }
    }

    /// Fetch when the table state maps to a key not yet observed
    pub fn sync(&self, cx: &mut App) {
        let pending = self.state.read(cx).pending_key();
        if let Some(key) = pending {
            self.fetch(key, cx);
        }
    }

    /// Fetch the observed key again with the same request parameters.
    ///
    /// The cached copy is dropped first; the rows on screen stay until the
    /// new response lands.
    pub fn refresh(&self, cx: &mut App) {
        let key = self.state.read(cx).refresh_key();
        info!("Refreshing artigos");
        self.client.invalidate(&key);
        self.fetch(key, cx);
    }

    /// When the page on screen was last fetched
    pub fn last_updated(&self, cx: &App) -> Option<DateTime<Local>> {
        let key = self.state.read(cx).refresh_key();
        self.client.updated_at(&key)
    }

    fn fetch(&self, key: QueryKey, cx: &mut App) {
        // Filters and sorting are part of the key but never reach the backend
        debug!(
            column_filters = %serde_json::to_string(key.column_filters()).unwrap_or_default(),
            global_filter = key.global_filter(),
            sorting = %serde_json::to_string(key.sorting()).unwrap_or_default(),
            "Artigos query parameters"
        );

        let cached = self.client.cached(&key);
        let ticket = self.state.update(cx, |state, cx| {
            let ticket = state.begin_fetch(key.clone(), cached);
            cx.notify();
            ticket
        });

        let client = self.client.clone();
        let api = self.api.clone();
        let state = self.state.clone();

        cx.spawn(async move |cx: &mut AsyncApp| {
            let result = run_in_tokio(async move { client.fetch(api.as_ref(), &key).await })
                .await
                .map_err(|e| Arc::<str>::from(e.to_string()));

            let _ = cx.update(|cx| {
                state.update(cx, |state, cx| {
                    if state.settle_fetch(ticket, result) {
                        cx.notify();
                    } else {
                        debug!("Discarded response for a superseded artigos fetch");
                    }
                });
            });
        })
        .detach();
    }

    /// Set a column filter value
    pub fn set_column_filter(&self, id: &str, value: String, cx: &mut App) {
        self.update_table(cx, |table| table.set_column_filter(id, value));
    }

    /// Switch a column to its next filter mode
    pub fn cycle_filter_mode(&self, id: &str, allowed: &[FilterMode], cx: &mut App) {
        self.update_table(cx, |table| {
            if let Some(mode) = table.cycle_column_filter_mode(id, allowed) {
                debug!(column = id, mode = ?mode, "Filter mode changed");
            }
        });
    }

    /// Set the global search text
    pub fn set_global_filter(&self, value: String, cx: &mut App) {
        self.update_table(cx, |table| table.set_global_filter(value));
    }

    /// Cycle sorting on a column
    pub fn toggle_sort(&self, id: &str, cx: &mut App) {
        self.update_table(cx, |table| table.toggle_sort(id));
    }

    /// Go to a page (zero-based)
    pub fn go_to_page(&self, page_index: usize, cx: &mut App) {
        let total = self.state.read(cx).total_count();
        self.update_table(cx, |table| table.set_page_index(page_index, total));
    }

    /// Change rows per page
    pub fn set_page_size(&self, page_size: usize, cx: &mut App) {
        self.update_table(cx, |table| table.set_page_size(page_size));
    }

    fn update_table(&self, cx: &mut App, f: impl FnOnce(&mut TableState)) {
        self.state.update(cx, |state, cx| {
            f(&mut state.table);
            cx.notify();
        });
    }
}
