//! JWT credential encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
pub use error::AuthError;

use jsonwebtoken::Algorithm;

/// Signing algorithm for every credential this service issues.
pub(crate) const ALGORITHM: Algorithm = Algorithm::HS256;
