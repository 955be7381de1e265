//! CLI command handlers, one file per command.

mod check;
mod clean;
mod dedup;
mod denylist;
mod input;
mod list;

pub use check::run_check;
pub use clean::run_clean;
pub use dedup::run_dedup;
pub use denylist::run_denylist;
pub use list::run_list;
