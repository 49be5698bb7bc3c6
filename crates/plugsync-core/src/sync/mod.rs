//! Applying planned actions to the filesystem
//!
//! Each action is independent: no step relies on the side effects of another.
//! Installed paths are not re-validated between planning and applying, so a
//! folder that vanished in between surfaces as an I/O error on copy.

mod reporter;
mod synchronizer;

pub use reporter::{Reporter, SyncEvent};
pub use synchronizer::{ActionOutcome, RunSummary, SyncMode, Synchronizer};
