//! Artigos Page
//!
//! Toolbar plus the articles table. Grid interaction flows into
//! [`ArtigosState`]; every state change re-derives the query key and the
//! controller fetches when it moved.

use std::sync::Arc;

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window,
};
use gpui_component::{
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    v_flex, Sizable,
};

use crate::components::composite::data_table::{Column, DataTable, DataTableEvent, TableFooter};
use crate::constants::PAGE_SIZE_OPTIONS;
use crate::domain::artigo::Artigo;
use crate::domain::config::AppConfig;
use crate::features::artigos::controller::ArtigosController;
use crate::i18n::{t, Locale};
use crate::query::QueryClient;
use crate::services::ArtigosApi;
use crate::state::artigos_state::ArtigosState;
use crate::state::table_state::{FilterMode, TableState};
use crate::theme::colors::GridColors;

const COL_ID: &str = "id";
const COL_TITLE: &str = "title";

/// Modes offered by the title filter
const TITLE_FILTER_MODES: [FilterMode; 2] = [FilterMode::Contains, FilterMode::StartsWith];

/// Artigos page component
pub struct ArtigosPage {
    locale: Locale,
    state: Entity<ArtigosState>,
    controller: ArtigosController,
    table: Entity<DataTable<Artigo>>,
    search_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl ArtigosPage {
    pub fn new(
        config: &AppConfig,
        client: QueryClient,
        api: Arc<dyn ArtigosApi>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = Locale::from_tag(config.locale());
        let state = cx.new(|_| ArtigosState::new(config.page_size));
        let controller = ArtigosController::new(state.clone(), client, api);

        let search_input = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(t(locale, "search-placeholder"))
        });
        let filter_label = t(locale, "filter-placeholder");
        let id_filter = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(format!("{filter_label} ID"))
        });
        let title_filter = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(format!("{filter_label} TITULO"))
        });

        let table = cx.new(|cx| {
            let mut table = DataTable::<Artigo>::new(cx);
            table.set_empty_message(t(locale, "table-no-data"));
            table.set_loading_message(t(locale, "table-loading"));
            table.set_filter_input(COL_ID, id_filter.clone());
            table.set_filter_input(COL_TITLE, title_filter.clone());
            table
        });

        let mut subscriptions = Vec::new();

        // Any state change may move the key
        subscriptions.push(cx.observe(&state, |this, _state, cx| {
            this.controller.sync(cx);
            this.update_table(cx);
            cx.notify();
        }));

        subscriptions.push(cx.subscribe(&table, |this, _table, event: &DataTableEvent, cx| {
            match event {
                DataTableEvent::SortToggled(id) => this.controller.toggle_sort(id, cx),
                DataTableEvent::FilterModeCycled(id) => {
                    this.controller.cycle_filter_mode(id, &TITLE_FILTER_MODES, cx)
                }
                DataTableEvent::PageChanged(page) => this.controller.go_to_page(*page, cx),
                DataTableEvent::PageSizeChanged(size) => this.controller.set_page_size(*size, cx),
            }
        }));

        subscriptions.push(cx.subscribe(&search_input, |this, input, event: &InputEvent, cx| {
            if matches!(event, InputEvent::Change) {
                let value = input.read(cx).value().to_string();
                this.controller.set_global_filter(value, cx);
            }
        }));

        for (column, input) in [(COL_ID, &id_filter), (COL_TITLE, &title_filter)] {
            subscriptions.push(cx.subscribe(input, move |this, input, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = input.read(cx).value().to_string();
                    this.controller.set_column_filter(column, value, cx);
                }
            }));
        }

        let page = Self {
            locale,
            state,
            controller,
            table,
            search_input,
            _subscriptions: subscriptions,
        };

        // Initial mount
        page.controller.sync(cx);
        page
    }

    /// Push the latest snapshot into the table
    fn update_table(&mut self, cx: &mut Context<Self>) {
        let locale = self.locale;
        let (snapshot, table_state) = {
            let state = self.state.read(cx);
            (state.snapshot(), state.table.clone())
        };

        let columns = Self::create_columns(locale, &table_state);
        let rows = snapshot.rows().to_vec();
        let alert = snapshot.is_error.then(|| t(locale, "error-loading"));
        let footer = TableFooter {
            pagination: table_state.pagination(),
            total_rows: snapshot.total_count(),
            page_sizes: PAGE_SIZE_OPTIONS.to_vec(),
            rows_per_page_label: t(locale, "rows-per-page"),
            of_label: t(locale, "range-of"),
        };

        self.table.update(cx, |table, cx| {
            table.set_columns(columns);
            table.set_rows(rows);
            table.set_loading(snapshot.is_loading);
            table.set_fetching(snapshot.is_fetching);
            table.set_alert(alert);
            table.set_footer(Some(footer));
            cx.notify();
        });
    }

    fn create_columns(locale: Locale, state: &TableState) -> Vec<Column<Artigo>> {
        let title_mode = state
            .column_filter_mode(COL_TITLE)
            .unwrap_or(FilterMode::Contains);
        let title_filter = state.column_filter(COL_TITLE).to_string();

        vec![
            Column::new(COL_ID, "ID", |row: &Artigo| {
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(row.id.to_string())
                    .into_any_element()
            })
            .fixed_width(120.0)
            .sortable(state.sort_direction(COL_ID))
            .filterable(),
            Column::new(COL_TITLE, "TITULO", move |row: &Artigo| {
                let matched = !title_filter.is_empty() && title_mode.matches(&row.title, &title_filter);
                div()
                    .text_sm()
                    .when(matched, |this| {
                        this.px_1().rounded_sm().bg(GridColors::match_highlight())
                    })
                    .child(row.title.clone())
                    .into_any_element()
            })
            .flex_width(Some(200.0))
            .sortable(state.sort_direction(COL_TITLE))
            .filter_modes(TITLE_FILTER_MODES.to_vec(), t(locale, title_mode.label_key())),
        ]
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let tooltip: SharedString = t(self.locale, "action-refresh");

        h_flex()
            .w_full()
            .gap_2()
            .px_2()
            .py_2()
            .bg(GridColors::toolbar_bg())
            .rounded_md()
            .child(
                div()
                    .w_64()
                    .child(Input::new(&self.search_input).small().cleanable(true)),
            )
            .child(div().flex_1())
            .when_some(self.controller.last_updated(cx), |this, updated_at| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(GridColors::text_muted())
                        .child(format!(
                            "{} {}",
                            t(self.locale, "last-updated"),
                            updated_at.format("%H:%M:%S")
                        )),
                )
            })
            .child(
                Button::new("refresh-data")
                    .label("⟳")
                    .tooltip(tooltip)
                    .small()
                    .ghost()
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.controller.refresh(cx);
                    })),
            )
    }
}

impl Render for ArtigosPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page = v_flex()
            .size_full()
            .p_4()
            .gap_3()
            .bg(GridColors::background());

        // Nothing until a fetch has produced data
        if !self.state.read(cx).snapshot().should_render() {
            return page;
        }

        page.child(self.render_toolbar(cx))
            .child(div().flex_1().min_h_0().child(self.table.clone()))
    }
}
