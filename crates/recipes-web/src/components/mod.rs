//! UI components
//!
//! Presentational pieces render from [`AppState`](crate::state::AppState)
//! and report user actions back through its methods.

mod detail;
mod empty;
mod form;
mod grid;
mod modal;
mod navbar;

pub use detail::DetailContent;
pub use empty::EmptyState;
pub use form::RecipeForm;
pub use grid::RecipeGrid;
pub use modal::{Dismiss, ModalFrame, ModalHost};
pub use navbar::Navbar;
