//! Authentication and authorization extractors.
//!
//! - [`auth::StaffUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireDrinksDetail`] and friends -- Require one drinks scope.

pub mod auth;
pub mod rbac;
