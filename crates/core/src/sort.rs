//! Comparator engine for project listings.
//!
//! Every key defines a total order and every sort is stable, so re-sorting a
//! sorted list by the same key returns it unchanged and records with equal
//! keys keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;
use crate::filter::{filter_projects, ProjectFilter};
use crate::project::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Start date, most recent first.
    #[default]
    Date,
    /// Title, ascending.
    Name,
    /// Status rank, completed first.
    Status,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Date, Self::Name, Self::Status];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Status => "status",
        }
    }

    /// Compare two projects under this key.
    pub fn compare(self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        match self {
            Self::Date => b.start_date.cmp(&a.start_date),
            Self::Name => compare_names(&a.title, &b.title),
            Self::Status => a.status.rank().cmp(&b.status.rank()),
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid sort key '{s}'. Must be one of: date, name, status"
            ))
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-facing name order.
///
/// Titles compare on their base letters first (accents and case folded away,
/// so "Éclair" sorts with the e's), then on accents, then on exact text.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Decompose, drop combining marks, lowercase.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return the records ordered by `key`. The input is left untouched.
pub fn sort_projects<'a, I>(records: I, key: SortKey) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut sorted: Vec<&ProjectRecord> = records.into_iter().collect();
    // `sort_by` is a stable merge sort.
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

// ---------------------------------------------------------------------------
// Combined query
// ---------------------------------------------------------------------------

/// A full projects-page query: filter then sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub filter: ProjectFilter,
    pub sort: SortKey,
}

pub fn query_projects<'a, I>(records: I, query: &ProjectQuery) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    sort_projects(filter_projects(records, &query.filter), query.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use crate::project::fixtures::project;
    use crate::project::{ProjectCategory, ProjectStatus};

    fn ids<'a>(records: &[&'a ProjectRecord]) -> Vec<&'a str> {
        records.iter().map(|p| p.id.as_str()).collect()
    }

    fn catalog() -> Vec<ProjectRecord> {
        use ProjectStatus::*;
        vec![
            project("a", "beta", ProjectCategory::Web, Planned, "2022-03-01"),
            project("b", "Alpha", ProjectCategory::Ai, Completed, "2023-06-01"),
            project("c", "gamma", ProjectCategory::Web, InProgress, "2021-01-01"),
            project("d", "delta", ProjectCategory::Devops, Completed, "2023-06-01"),
            project("e", "alpha", ProjectCategory::Mobile, InProgress, "2024-02-01"),
            project("f", "Epsilon", ProjectCategory::Web, Planned, "2020-07-01"),
        ]
    }

    // -- date ---------------------------------------------------------------

    #[test]
    fn date_is_most_recent_first_and_stable_on_ties() {
        let store = catalog();
        let sorted = sort_projects(&store, SortKey::Date);
        // b and d share a start date; b came first in the input.
        assert_eq!(ids(&sorted), vec!["e", "b", "d", "a", "c", "f"]);
    }

    #[test]
    fn date_is_the_default_key() {
        assert_eq!(SortKey::default(), SortKey::Date);
    }

    // -- name ---------------------------------------------------------------

    #[test]
    fn name_ignores_case() {
        let store = catalog();
        let sorted = sort_projects(&store, SortKey::Name);
        // "Alpha" < "alpha" on the exact-text tie-break.
        assert_eq!(ids(&sorted), vec!["b", "e", "a", "d", "f", "c"]);
    }

    #[test]
    fn compare_names_is_total() {
        assert_eq!(compare_names("Zed", "alpha"), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
        assert_ne!(compare_names("Same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_titles_sort_with_their_base_letter() {
        let store = vec![
            project("z", "Zebra", ProjectCategory::Web, ProjectStatus::Completed, "2023-01-01"),
            project("e", "Éclair", ProjectCategory::Web, ProjectStatus::Completed, "2023-01-01"),
            project("d", "delta", ProjectCategory::Web, ProjectStatus::Completed, "2023-01-01"),
        ];
        let sorted = sort_projects(&store, SortKey::Name);
        assert_eq!(ids(&sorted), vec!["d", "e", "z"]);
    }

    #[test]
    fn accents_only_break_ties_between_equal_base_letters() {
        assert_eq!(compare_names("eclair", "éclair"), Ordering::Less);
        assert_eq!(compare_names("éclair", "eclairs"), Ordering::Less);
        assert_eq!(compare_names("Ñandu", "nandu"), Ordering::Greater);
    }

    // -- status -------------------------------------------------------------

    #[test]
    fn status_groups_completed_then_in_progress_then_planned() {
        let store = catalog();
        let sorted = sort_projects(&store, SortKey::Status);
        assert_eq!(ids(&sorted), vec!["b", "d", "c", "e", "a", "f"]);
    }

    // -- properties ---------------------------------------------------------

    #[test]
    fn sorting_is_idempotent() {
        let store = catalog();
        for key in SortKey::ALL {
            let once = sort_projects(&store, key);
            let twice = sort_projects(once.iter().copied(), key);
            assert_eq!(ids(&once), ids(&twice), "key {key}");
        }
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let store = catalog();
        let before = store.clone();
        let _ = sort_projects(&store, SortKey::Name);
        assert_eq!(store, before);
    }

    #[test]
    fn sort_key_parses() {
        assert_eq!("status".parse::<SortKey>().unwrap(), SortKey::Status);
        assert!("rating".parse::<SortKey>().is_err());
    }

    // -- query --------------------------------------------------------------

    #[test]
    fn query_filters_then_sorts() {
        let store = catalog();
        let query = ProjectQuery {
            filter: ProjectFilter::new(CategoryFilter::Only(ProjectCategory::Web), ""),
            sort: SortKey::Name,
        };
        assert_eq!(ids(&query_projects(&store, &query)), vec!["a", "f", "c"]);
    }
}
