//! Persistence synchronization.
//!
//! Completed board transitions become [`SyncCommand`]s. Each dispatched
//! command is recorded in the [`SyncLog`] as pending and resolved to
//! confirmed or failed when its request finishes. Requests are
//! fire-and-forget from the UI's point of view: nothing blocks, nothing is
//! retried, and in-flight requests have no ordering between them.

mod command;
mod log;
mod worker;

pub use command::SyncCommand;
pub use log::{SyncEntry, SyncLog, SyncStatus};
pub use worker::{start, SyncHandle, SyncJob};
