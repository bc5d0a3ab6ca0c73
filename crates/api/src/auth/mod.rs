//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 bearer-token validation and issuing.

pub mod jwt;
