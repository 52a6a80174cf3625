//! User entity model and DTOs.

use serde::Serialize;
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub is_public: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub is_public: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            location: user.location,
            profile_photo: user.profile_photo,
            is_public: user.is_public,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Compact public profile embedded in swap requests, ratings, and the
/// notification feed.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub profile_photo: Option<String>,
    pub location: Option<String>,
}

/// DTO for creating a new user. The password is already hashed by the
/// caller.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub location: Option<String>,
}

/// DTO for updating a user profile. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub is_public: Option<bool>,
}
