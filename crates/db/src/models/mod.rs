//! Domain model structs and DTOs.
//!
//! Each submodule contains the `FromRow` + `Serialize` row structs for one
//! table (and the read-side projections joined from it).

pub mod artist;
pub mod category;
pub mod drink;
pub mod question;
pub mod show;
pub mod venue;
