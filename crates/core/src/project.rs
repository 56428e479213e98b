//! Project records and their categorical fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Number of technology tags shown on a project card before truncation.
pub const CARD_TAG_LIMIT: usize = 4;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Closed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Ai,
    Devops,
    Blockchain,
}

impl ProjectCategory {
    /// Every category, in the order the projects page lists its filters.
    pub const ALL: [Self; 5] = [Self::Web, Self::Mobile, Self::Ai, Self::Devops, Self::Blockchain];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Ai => "ai",
            Self::Devops => "devops",
            Self::Blockchain => "blockchain",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project category '{s}'. Must be one of: web, mobile, ai, devops, blockchain"
                ))
            })
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
///
/// Declaration order is the status sort order: `Completed` ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed = 0,
    InProgress = 1,
    Planned = 2,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::InProgress, Self::Planned];

    /// Integer rank used by the status sort (completed=0, in-progress=1, planned=2).
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project status '{s}'. Must be one of: completed, in-progress, planned"
                ))
            })
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A portfolio project as stored in `projects.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(with = "crate::types::date")]
    pub start_date: Date,
    #[serde(
        default,
        with = "crate::types::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Date>,
}

/// The visible head of a tag list plus how many tags were cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl ProjectRecord {
    /// A project without an end date is still running.
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// Project length in started 30-day months, `None` while ongoing.
    pub fn duration_months(&self) -> Option<i64> {
        self.end_date
            .map(|end| crate::stats::months_between(self.start_date, end))
    }

    /// First `limit` technology tags, in dataset order.
    pub fn display_tags(&self, limit: usize) -> TagPreview<'_> {
        let shown = &self.technologies[..self.technologies.len().min(limit)];
        TagPreview {
            shown,
            hidden: self.technologies.len() - shown.len(),
        }
    }
}


#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::fixtures::project;
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in ProjectCategory::ALL {
            assert_eq!(category.as_str().parse::<ProjectCategory>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_a_validation_error() {
        assert_matches!("games".parse::<ProjectCategory>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn status_ranks_follow_lifecycle() {
        assert_eq!(ProjectStatus::Completed.rank(), 0);
        assert_eq!(ProjectStatus::InProgress.rank(), 1);
        assert_eq!(ProjectStatus::Planned.rank(), 2);
        assert!(ProjectStatus::Completed < ProjectStatus::Planned);
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!("in-progress".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
    }

    #[test]
    fn record_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": "p1",
            "title": "Trader",
            "description": "Automated trading",
            "longDescription": "Long form",
            "image": "/images/trader.png",
            "galleryImages": ["/a.png", "/b.png"],
            "technologies": ["Rust", "Trading Bots"],
            "category": "ai",
            "status": "in-progress",
            "liveUrl": "https://trader.example.com",
            "featured": true,
            "startDate": "2023-02-01"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, ProjectCategory::Ai);
        assert_eq!(record.status, ProjectStatus::InProgress);
        assert_eq!(record.gallery_images, vec!["/a.png", "/b.png"]);
        assert!(record.github_url.is_none());
        assert!(record.is_ongoing());
    }

    #[test]
    fn missing_gallery_reads_as_empty() {
        let json = r#"{
            "id": "p2", "title": "t", "description": "d", "longDescription": "l",
            "image": "i", "technologies": [], "category": "web",
            "status": "planned", "startDate": "2024-01-01", "endDate": null
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.gallery_images.is_empty());
        assert!(!record.featured);
        assert!(record.end_date.is_none());
    }

    #[test]
    fn display_tags_truncates_and_counts_rest() {
        let mut p = project("p", "P", ProjectCategory::Web, ProjectStatus::Completed, "2020-01-01");
        p.technologies = ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec();

        let preview = p.display_tags(CARD_TAG_LIMIT);
        assert_eq!(preview.shown, &p.technologies[..4]);
        assert_eq!(preview.hidden, 2);
    }

    #[test]
    fn display_tags_with_few_tags_hides_nothing() {
        let mut p = project("p", "P", ProjectCategory::Web, ProjectStatus::Completed, "2020-01-01");
        p.technologies = vec!["Rust".to_string()];

        let preview = p.display_tags(CARD_TAG_LIMIT);
        assert_eq!(preview.shown.len(), 1);
        assert_eq!(preview.hidden, 0);
    }

    #[test]
    fn duration_counts_started_months() {
        let mut p = project("p", "P", ProjectCategory::Web, ProjectStatus::Completed, "2023-01-01");
        assert_eq!(p.duration_months(), None);

        p.end_date = crate::types::parse_date("2023-03-15");
        // 73 days -> 3 started 30-day months.
        assert_eq!(p.duration_months(), Some(3));
    }
}
