//! Artigos - The articles grid
//!
//! The page wires the table component to [`ArtigosState`]; the controller
//! owns fetching.
//!
//! [`ArtigosState`]: crate::state::artigos_state::ArtigosState

pub mod controller;
pub mod page;

pub use controller::ArtigosController;
pub use page::ArtigosPage;
