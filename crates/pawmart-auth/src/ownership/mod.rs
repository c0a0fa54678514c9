//! Owner checks applied before any resource mutation.

pub mod guard;

pub use guard::{require_owner, verify_claimed_owner};
