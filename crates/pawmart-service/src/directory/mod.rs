//! Identity directory.

pub mod service;

pub use service::{DirectoryService, SyncOutcome};
