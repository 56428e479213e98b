//! Predicate filter over project records.
//!
//! A [`ProjectFilter`] holds a category predicate and a free-text predicate.
//! Both default to "match everything" and are combined with AND.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::project::{ProjectCategory, ProjectRecord};

/// Wildcard token accepted in place of a category.
pub const CATEGORY_WILDCARD: &str = "all";

// ---------------------------------------------------------------------------
// Category predicate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CATEGORY_WILDCARD {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(CATEGORY_WILDCARD),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Combined filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: CategoryFilter,
    /// Case-insensitive substring searched in title, description and tags.
    /// Blank means no text predicate.
    pub text: String,
}

impl ProjectFilter {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Test a single record against both predicates.
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        self.category.matches(project.category) && text_matches(project, &self.needle())
    }

    fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// `needle` must already be lowercased. An empty needle matches everything.
fn text_matches(project: &ProjectRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&project.title)
        || contains(&project.description)
        || project.technologies.iter().any(|tech| contains(tech))
}

/// Keep the records satisfying `filter`, preserving input order.
///
/// An empty result is a normal outcome, not an error.
pub fn filter_projects<'a, I>(records: I, filter: &ProjectFilter) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let needle = filter.needle();
    records
        .into_iter()
        .filter(|p| filter.category.matches(p.category) && text_matches(p, &needle))
        .collect()
}
