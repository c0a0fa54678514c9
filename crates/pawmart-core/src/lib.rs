//! # pawmart-core
//!
//! Core crate for the PawMart backend. Contains the document store trait,
//! configuration schemas, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PawMart crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
