//! Command implementations for the recipes CLI.

mod add;
mod delete;
mod edit;
mod export;
mod list;
mod show;

pub use add::cmd_add;
pub use delete::cmd_delete;
pub use edit::cmd_edit;
pub use export::cmd_export;
pub use list::{cmd_list, cmd_search};
pub use show::cmd_show;
