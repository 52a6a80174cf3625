//! Rating score rules.

use crate::error::CoreError;

/// Lowest allowed rating score.
pub const MIN_RATING: i32 = 1;

/// Highest allowed rating score.
pub const MAX_RATING: i32 = 5;

/// Validate a rating score is within the 1-5 star range.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&score) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}
