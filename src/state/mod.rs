//! State - GPUI Entity State Modules
//!
//! `table_state` is plain data edited by the grid; `artigos_state` is the
//! entity the page observes.

pub mod artigos_state;
pub mod table_state;
