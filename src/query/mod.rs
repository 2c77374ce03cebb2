//! Query - Fetch-and-Cache Binding
//!
//! Toolkit-independent core behind the artigos table: UI state is projected
//! into a [`key::QueryKey`], pages are fetched through the
//! [`client::QueryClient`] and cached per key, and a
//! [`observer::QueryObserver`] decides what the view shows.

pub mod cache;
pub mod client;
pub mod key;
pub mod observer;
pub mod request;
pub mod retry;

#[cfg(test)]
pub(crate) mod testing;

pub use client::QueryClient;
pub use key::QueryKey;
pub use observer::{FetchTicket, QueryObserver, QueryPhase, QuerySnapshot};
pub use request::PageRequest;
pub use retry::RetryPolicy;
