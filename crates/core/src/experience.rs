//! Work experience records.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// A position as stored in `experience.json`.
///
/// `current == true` is expected to come with no `end_date`; the store reports
/// violations as consistency issues rather than rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    #[serde(with = "crate::types::date")]
    pub start_date: Date,
    #[serde(
        default,
        with = "crate::types::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl ExperienceRecord {
    /// Years spent in the position, measured up to `today` while still held.
    pub fn years(&self, today: Date) -> f64 {
        crate::stats::years_between(self.start_date, self.end_date.unwrap_or(today))
    }
}
