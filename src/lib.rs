//! Artigos Grid Library
//!
//! A native client that pages through the artigos REST API in a filterable,
//! sortable table. Table state drives a cached query; the page renders
//! whatever the query currently holds.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod query;
pub mod services;
pub mod state;
pub mod theme;
