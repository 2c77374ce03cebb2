//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, SharedString};

use crate::state::table_state::FilterMode;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier (matches the row field and the filter/sort ids)
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    /// Current sort: `None` unsorted, `Some(true)` descending
    pub sort: Option<bool>,
    /// Whether the column shows a filter input
    pub filterable: bool,
    /// Filter modes the user may switch between (empty = no mode selector)
    pub filter_modes: Vec<FilterMode>,
    /// Label of the active filter mode
    pub filter_mode_label: Option<SharedString>,
    /// Cell renderer function
    pub render: Box<dyn Fn(&R) -> AnyElement + Send + Sync>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Takes the remaining space, never narrower than `min`
    Flex { min: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            sort: None,
            filterable: false,
            filter_modes: Vec::new(),
            filter_mode_label: None,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with a lower bound
    pub fn flex_width(mut self, min: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// Make the column sortable, showing the given direction
    pub fn sortable(mut self, sort: Option<bool>) -> Self {
        self.sortable = true;
        self.sort = sort;
        self
    }

    /// Show a filter input under the header
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Offer a filter mode selector; `active_label` names the current mode
    pub fn filter_modes(
        mut self,
        modes: Vec<FilterMode>,
        active_label: impl Into<SharedString>,
    ) -> Self {
        self.filterable = true;
        self.filter_modes = modes;
        self.filter_mode_label = Some(active_label.into());
        self
    }

    /// Glyph for the sort indicator
    pub fn sort_glyph(&self) -> &'static str {
        match self.sort {
            Some(false) => "▲",
            Some(true) => "▼",
            None if self.sortable => "⇅",
            None => "",
        }
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}
