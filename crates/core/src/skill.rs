//! Skill records, skill categories and proficiency levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Closed set of skill categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Ai,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [Self; 6] = [
        Self::Frontend,
        Self::Backend,
        Self::Devops,
        Self::Ai,
        Self::Database,
        Self::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Devops => "devops",
            Self::Ai => "ai",
            Self::Database => "database",
            Self::Tools => "tools",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid skill category '{s}'. Must be one of: frontend, backend, devops, ai, database, tools"
            ))
        })
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proficiency grade. Totally ordered: `Beginner < Intermediate < Advanced < Expert`.
///
/// The discriminant is the numeric rank (beginner=1 ... expert=4); the derived
/// `Ord` follows it, so this enum is the only place the ordering lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl SkillLevel {
    /// Highest grade first.
    pub const DESCENDING: [Self; 4] = [Self::Expert, Self::Advanced, Self::Intermediate, Self::Beginner];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DESCENDING.into_iter().find(|l| l.as_str() == s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid skill level '{s}'. Must be one of: beginner, intermediate, advanced, expert"
            ))
        })
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill as stored in `skills.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    /// Non-negative; checked when the store is built.
    pub years_of_experience: f64,
    pub description: String,
}
