//! Core type definitions used across the PawMart workspace.

pub mod document;
pub mod sorting;

pub use document::{Document, Fields, FindQuery, UpsertOutcome};
pub use sorting::{SortDirection, SortField};
