//! Weekly availability slot rules.

use std::fmt;

use chrono::NaiveTime;

use crate::error::CoreError;

/// Day a weekly availability slot falls on.
///
/// Stored in the database as the upper-case string form ([`Self::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All days in canonical order, for iteration and error messages.
pub const ALL_DAYS: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

impl DayOfWeek {
    /// The canonical wire/storage form, e.g. `"MONDAY"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    /// Parse the canonical upper-case form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<DayOfWeek> {
        ALL_DAYS.into_iter().find(|day| day.as_str() == s)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate the time range of a weekly availability slot.
///
/// A slot must cover a non-empty range within a single day.
pub fn validate_slot(start_time: NaiveTime, end_time: NaiveTime) -> Result<(), CoreError> {
    if end_time <= start_time {
        return Err(CoreError::Validation(
            "end_time must be after start_time".into(),
        ));
    }
    Ok(())
}
