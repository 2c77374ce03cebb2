//! DataTable Component
//!
//! A reusable server-paginated data table.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth};
pub use data_table::{DataTable, DataTableEvent, TableFooter};
pub use pagination::Pagination;
