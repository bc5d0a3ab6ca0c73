//! Domain logic shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O; every function is a pure
//! transformation over plain values so it can be unit tested in isolation.

pub mod drinks;
pub mod error;
pub mod listings;
pub mod pagination;
pub mod permissions;
pub mod quiz;
pub mod shows;
pub mod trivia;
pub mod types;
