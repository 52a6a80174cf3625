//! Skill listing directions and proficiency levels.

use std::fmt;

/// Direction of a user's skill listing: something they teach, or something
/// they want to learn.
///
/// Stored in the database as the upper-case string form ([`Self::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillType {
    Offered,
    Wanted,
}

impl SkillType {
    /// The canonical wire/storage form, e.g. `"OFFERED"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SkillType::Offered => "OFFERED",
            SkillType::Wanted => "WANTED",
        }
    }

    /// Parse the canonical upper-case form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<SkillType> {
        match s {
            "OFFERED" => Some(SkillType::Offered),
            "WANTED" => Some(SkillType::Wanted),
            _ => None,
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported proficiency attached to a skill listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// The canonical wire/storage form, e.g. `"BEGINNER"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "BEGINNER",
            SkillLevel::Intermediate => "INTERMEDIATE",
            SkillLevel::Advanced => "ADVANCED",
            SkillLevel::Expert => "EXPERT",
        }
    }

    /// Parse the canonical upper-case form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<SkillLevel> {
        match s {
            "BEGINNER" => Some(SkillLevel::Beginner),
            "INTERMEDIATE" => Some(SkillLevel::Intermediate),
            "ADVANCED" => Some(SkillLevel::Advanced),
            "EXPERT" => Some(SkillLevel::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
