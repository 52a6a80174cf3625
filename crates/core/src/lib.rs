//! Domain types and rules for the skill-swap platform.
//!
//! This crate is I/O-free: no database, no HTTP, no async. It holds the
//! shared id/timestamp aliases, the domain error type, and the pure rules
//! (swap lifecycle, skill directions, availability slots, pagination
//! clamping) that the `db` and `api` crates build on.

pub mod availability;
pub mod error;
pub mod pagination;
pub mod rating;
pub mod skill;
pub mod swap;
pub mod types;
