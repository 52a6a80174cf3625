//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Where applicable, a joined "detail" row plus the nested response
//!   shape it converts into

pub mod availability;
pub mod rating;
pub mod search;
pub mod skill;
pub mod swap_request;
pub mod user;
pub mod user_skill;
