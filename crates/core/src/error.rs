use crate::types::DbId;

/// Domain-level error shared by every layer above `core`.
///
/// The API layer maps each variant onto an HTTP status; see the `api` crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation is valid in principle but not from the entity's
    /// current lifecycle state (e.g. completing a swap that was never
    /// accepted).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
