//! Shared pieces of the `recipes` command-line tool
//!
//! Argument types, store setup and text rendering live here so they can be
//! unit tested apart from the binary.

pub mod args;
pub mod render;
pub mod session;

// Re-export commonly used items at the crate root for convenience
pub use args::RecipeFields;
pub use render::{detail, short_id, summary_line};
pub use session::{open_book, resolve_id};
