//! Composite components built from gpui and gpui-component primitives

pub mod data_table;
