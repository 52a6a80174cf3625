//! Request handlers, one submodule per resource.
//!
//! Handlers validate input, enforce authorization, delegate persistence to
//! the repositories in `skillswap_db`, and map failures via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod availability;
pub mod notifications;
pub mod ratings;
pub mod skills;
pub mod swaps;
pub mod user_skills;
pub mod users;
