//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod availability_repo;
pub mod rating_repo;
pub mod skill_repo;
pub mod swap_request_repo;
pub mod user_repo;
pub mod user_skill_repo;

pub use availability_repo::AvailabilityRepo;
pub use rating_repo::RatingRepo;
pub use skill_repo::SkillRepo;
pub use swap_request_repo::SwapRequestRepo;
pub use user_repo::UserRepo;
pub use user_skill_repo::UserSkillRepo;
