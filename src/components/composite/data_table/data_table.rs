//! DataTable Component
//!
//! A server-paginated data table. The table only renders what it is given;
//! user interaction is reported through [`DataTableEvent`] and the owner
//! decides what to do with it.

use std::collections::HashMap;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, EventEmitter, FontWeight, IntoElement,
    ParentElement, Render, SharedString, Styled, Window,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState},
    v_flex, Sizable,
};

use super::column::{Column, ColumnWidth};
use super::pagination::Pagination;
use crate::constants::{PROGRESS_BAR_HEIGHT, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::state::table_state::PaginationState;
use crate::theme::colors::GridColors;

/// Interaction reported by the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTableEvent {
    /// Header of a sortable column was clicked
    SortToggled(SharedString),
    /// The filter mode selector of a column was clicked
    FilterModeCycled(SharedString),
    /// A page was picked (zero-based)
    PageChanged(usize),
    /// A page size was picked
    PageSizeChanged(usize),
}

/// Footer contents
#[derive(Debug, Clone)]
pub struct TableFooter {
    pub pagination: PaginationState,
    pub total_rows: u64,
    pub page_sizes: Vec<usize>,
    pub rows_per_page_label: SharedString,
    pub of_label: SharedString,
}

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    filter_inputs: HashMap<SharedString, Entity<InputState>>,
    footer: Option<TableFooter>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    fetching: bool,
    alert: Option<SharedString>,
    empty_message: SharedString,
    loading_message: SharedString,
}

impl<R: Clone + Send + Sync + 'static> EventEmitter<DataTableEvent> for DataTable<R> {}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            filter_inputs: HashMap::new(),
            footer: None,
            row_height: TABLE_ROW_HEIGHT,
            header_height: TABLE_HEADER_HEIGHT,
            loading: false,
            fetching: false,
            alert: None,
            empty_message: "No data".into(),
            loading_message: "Loading...".into(),
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Attach the filter input shown under a filterable column
    pub fn set_filter_input(&mut self, column_id: impl Into<SharedString>, input: Entity<InputState>) {
        self.filter_inputs.insert(column_id.into(), input);
    }

    /// Set the footer; `None` hides pagination
    pub fn set_footer(&mut self, footer: Option<TableFooter>) {
        self.footer = footer;
    }

    /// Set loading state (no rows to show yet)
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Show the progress bar
    pub fn set_fetching(&mut self, fetching: bool) {
        self.fetching = fetching;
    }

    /// Show an error banner above the table
    pub fn set_alert(&mut self, alert: Option<SharedString>) {
        self.alert = alert;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Set the loading message
    pub fn set_loading_message(&mut self, message: impl Into<SharedString>) {
        self.loading_message = message.into();
    }

    fn sized_cell(width: ColumnWidth) -> gpui::Div {
        match width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => div().flex_1().min_w(px(min.unwrap_or(0.0))),
        }
    }

    /// Render the error banner
    fn render_alert(&self, message: SharedString) -> impl IntoElement {
        div()
            .w_full()
            .px_4()
            .py_2()
            .bg(GridColors::danger_bg())
            .text_sm()
            .text_color(GridColors::danger())
            .child(message)
    }

    /// Render the progress bar (kept in layout so rows don't jump)
    fn render_progress(&self) -> impl IntoElement {
        div()
            .w_full()
            .h(px(PROGRESS_BAR_HEIGHT))
            .when(self.fetching, |bar| {
                bar.bg(GridColors::progress_track())
                    .child(div().h_full().w_1_3().bg(GridColors::progress_fill()))
            })
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .h(px(self.header_height))
            .w_full()
            .bg(GridColors::table_header_bg())
            .border_b_1()
            .border_color(GridColors::border())
            .children(self.columns.iter().enumerate().map(|(ix, col)| {
                let glyph = col.sort_glyph();
                let sorted = col.sort.is_some();
                let label = h_flex()
                    .gap_1()
                    .child(col.label.clone())
                    .when(!glyph.is_empty(), |this| {
                        this.child(
                            div()
                                .text_xs()
                                .text_color(if sorted {
                                    GridColors::accent()
                                } else {
                                    GridColors::text_muted()
                                })
                                .child(glyph),
                        )
                    });

                let id = col.id.clone();
                Self::sized_cell(col.width)
                    .px_3()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(GridColors::text_primary())
                    .child(
                        div()
                            .id(("header", ix))
                            .when(col.sortable, |this| {
                                this.cursor_pointer().on_click(cx.listener(
                                    move |_this, _event: &ClickEvent, _window, cx| {
                                        cx.emit(DataTableEvent::SortToggled(id.clone()));
                                    },
                                ))
                            })
                            .child(label),
                    )
            }))
    }

    /// Render the filter row; absent when no column is filterable
    fn render_filters(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        if !self.columns.iter().any(|col| col.filterable) {
            return None;
        }

        let row = h_flex()
            .w_full()
            .py_1()
            .border_b_1()
            .border_color(GridColors::border())
            .children(self.columns.iter().enumerate().map(|(ix, col)| {
                let input = col
                    .filterable
                    .then(|| self.filter_inputs.get(&col.id))
                    .flatten();
                let id = col.id.clone();

                Self::sized_cell(col.width)
                    .px_2()
                    .child(
                        v_flex()
                            .gap_0p5()
                            .when_some(input, |this, input| {
                                this.child(Input::new(input).small().cleanable(true))
                            })
                            .when_some(col.filter_mode_label.clone(), |this, mode| {
                                this.child(
                                    div()
                                        .id(("filter-mode", ix))
                                        .text_xs()
                                        .text_color(GridColors::text_secondary())
                                        .cursor_pointer()
                                        .hover(|s| s.text_color(GridColors::accent()))
                                        .child(mode)
                                        .on_click(cx.listener(
                                            move |_this, _event: &ClickEvent, _window, cx| {
                                                cx.emit(DataTableEvent::FilterModeCycled(id.clone()));
                                            },
                                        )),
                                )
                            }),
                    )
            }));

        Some(row)
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            GridColors::content_bg()
        } else {
            GridColors::table_row_alt()
        };

        h_flex()
            .h(px(self.row_height))
            .w_full()
            .bg(bg)
            .hover(|s| s.bg(GridColors::table_row_hover()))
            .border_b_1()
            .border_color(GridColors::border())
            .children(self.columns.iter().map(|col| {
                Self::sized_cell(col.width)
                    .h_full()
                    .flex()
                    .items_center()
                    .px_3()
                    .text_sm()
                    .text_color(GridColors::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
    }

    /// Render a centered message in place of the rows
    fn render_message(&self, message: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(GridColors::text_muted())
            .child(message)
    }

    fn render_footer(&self, footer: &TableFooter, cx: &mut Context<Self>) -> impl IntoElement {
        let pagination = footer.pagination;
        let page_table = cx.entity();
        let size_table = cx.entity();

        Pagination::new(
            pagination.page_index,
            pagination.page_count(footer.total_rows),
            pagination.page_size,
            pagination.visible_range(footer.total_rows),
            footer.total_rows,
        )
        .page_sizes(&footer.page_sizes)
        .labels(footer.rows_per_page_label.clone(), footer.of_label.clone())
        .on_page_change(move |page, _window, cx| {
            page_table.update(cx, |_, cx| cx.emit(DataTableEvent::PageChanged(page)));
        })
        .on_page_size_change(move |size, _window, cx| {
            size_table.update(cx, |_, cx| cx.emit(DataTableEvent::PageSizeChanged(size)));
        })
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = v_flex()
            .size_full()
            .bg(GridColors::content_bg())
            .border_1()
            .border_color(GridColors::border())
            .rounded_md()
            .overflow_hidden();

        if let Some(alert) = self.alert.clone() {
            table = table.child(self.render_alert(alert));
        }
        table = table
            .child(self.render_progress())
            .child(self.render_header(cx))
            .children(self.render_filters(cx));

        // Body
        if self.loading && self.rows.is_empty() {
            table = table.child(self.render_message(self.loading_message.clone()));
        } else if self.rows.is_empty() {
            table = table.child(self.render_message(self.empty_message.clone()));
        } else {
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        if let Some(footer) = self.footer.clone() {
            table = table.child(self.render_footer(&footer, cx));
        }

        table
    }
}
