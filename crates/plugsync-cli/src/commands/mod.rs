//! Command implementations for plugsync-cli

pub mod check;
pub mod list;
pub mod patch;
pub mod plan;

pub use check::run_check;
pub use list::run_list;
pub use patch::run_patch;
pub use plan::run_plan;
