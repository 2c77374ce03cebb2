//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod artigo;
pub mod config;
