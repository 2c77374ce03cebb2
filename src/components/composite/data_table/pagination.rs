//! Pagination Component
//!
//! Page navigation and page-size selection for the DataTable footer.

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GridColors;

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    /// Zero-based page index
    page_index: usize,
    page_count: usize,
    page_size: usize,
    /// One-based inclusive row range shown on this page
    visible: (u64, u64),
    total_rows: u64,
    page_sizes: Vec<usize>,
    rows_per_page_label: SharedString,
    of_label: SharedString,
    on_page_change: Option<PageHandler>,
    on_page_size_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(
        page_index: usize,
        page_count: usize,
        page_size: usize,
        visible: (u64, u64),
        total_rows: u64,
    ) -> Self {
        Self {
            page_index,
            page_count: page_count.max(1),
            page_size,
            visible,
            total_rows,
            page_sizes: Vec::new(),
            rows_per_page_label: "Rows per page".into(),
            of_label: "of".into(),
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    /// Offer these page sizes
    pub fn page_sizes(mut self, sizes: &[usize]) -> Self {
        self.page_sizes = sizes.to_vec();
        self
    }

    /// Set the footer labels
    pub fn labels(
        mut self,
        rows_per_page: impl Into<SharedString>,
        of: impl Into<SharedString>,
    ) -> Self {
        self.rows_per_page_label = rows_per_page.into();
        self.of_label = of.into();
        self
    }

    /// Set the page change handler (receives the zero-based target page)
    pub fn on_page_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    /// Set the page size change handler
    pub fn on_page_size_change(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_page_size_change = Some(Rc::new(handler));
        self
    }

    /// "first–last of total"
    fn range_label(&self) -> String {
        let (first, last) = self.visible;
        format!("{}–{} {} {}", first, last, self.of_label, self.total_rows)
    }

    fn nav_button(
        id: &'static str,
        glyph: &'static str,
        target: Option<usize>,
        handler: Option<PageHandler>,
    ) -> impl IntoElement {
        let enabled = target.is_some() && handler.is_some();

        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                GridColors::text_primary()
            } else {
                GridColors::text_muted()
            })
            .child(glyph)
            .when_some(target.zip(handler), |btn, (page, handler)| {
                btn.cursor_pointer()
                    .hover(|s| s.bg(GridColors::table_row_hover()))
                    .on_click(move |_: &ClickEvent, window, cx| handler(page, window, cx))
            })
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let prev = self.page_index.checked_sub(1);
        let next = (self.page_index + 1 < self.page_count).then_some(self.page_index + 1);
        let range = self.range_label();

        let size_chips = self.page_sizes.iter().enumerate().map(|(ix, &size)| {
            let active = size == self.page_size;
            let handler = self.on_page_size_change.clone();

            div()
                .id(("page-size", ix))
                .px_2()
                .py_0p5()
                .rounded_sm()
                .text_sm()
                .text_color(if active {
                    GridColors::accent()
                } else {
                    GridColors::text_secondary()
                })
                .when(active, |chip| chip.bg(GridColors::match_highlight()))
                .when_some(handler.filter(|_| !active), |chip, handler| {
                    chip.cursor_pointer()
                        .hover(|s| s.bg(GridColors::table_row_hover()))
                        .on_click(move |_: &ClickEvent, window, cx| handler(size, window, cx))
                })
                .child(size.to_string())
        });

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_end()
            .gap_4()
            .border_t_1()
            .border_color(GridColors::border())
            // Page size
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_secondary())
                            .child(self.rows_per_page_label.clone()),
                    )
                    .children(size_chips),
            )
            // Row range
            .child(
                div()
                    .text_sm()
                    .text_color(GridColors::text_primary())
                    .child(range),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::nav_button(
                        "prev-page",
                        "←",
                        prev,
                        self.on_page_change.clone(),
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_secondary())
                            .child(format!("{} / {}", self.page_index + 1, self.page_count)),
                    )
                    .child(Self::nav_button(
                        "next-page",
                        "→",
                        next,
                        self.on_page_change.clone(),
                    )),
            )
    }
}
