//! # pawmart-auth
//!
//! Identity-scoped access control for PawMart.
//!
//! ## Modules
//!
//! - `jwt`: signed, short-lived credentials (issuing and verification)
//! - `ownership`: owner checks applied before any resource mutation

pub mod jwt;
pub mod ownership;

pub use jwt::{AuthError, Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use ownership::{require_owner, verify_claimed_owner};
