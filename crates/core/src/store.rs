//! The record store: every dataset, loaded once and never mutated.
//!
//! Loading is the only fallible step. Hard schema problems (unreadable file,
//! malformed JSON, unknown enum value, bad date, duplicate id) fail the load
//! with [`DataLoadError`]. Soft inconsistencies are collected as
//! [`ConsistencyIssue`]s and logged instead.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::education::{Certification, Degree, EducationEntry, RawEducationRecord};
use crate::error::{CoreError, DataLoadError};
use crate::experience::ExperienceRecord;
use crate::profile::PersonalInfo;
use crate::project::{ProjectRecord, ProjectStatus};
use crate::skill::SkillRecord;

pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const EDUCATION_FILE: &str = "education.json";
/// Optional; the profile endpoint reports not-found without it.
pub const PERSONAL_FILE: &str = "personal.json";

// ---------------------------------------------------------------------------
// Consistency issues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Project marked completed but carrying no end date.
    CompletedWithoutEndDate,
    /// Position or degree marked current but carrying an end date.
    CurrentWithEndDate,
    EndBeforeStart,
}

/// A soft constraint the dataset breaks. Reported, never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyIssue {
    pub entity: &'static str,
    pub id: String,
    pub kind: IssueKind,
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            IssueKind::CompletedWithoutEndDate => "is completed but has no end date",
            IssueKind::CurrentWithEndDate => "is current but has an end date",
            IssueKind::EndBeforeStart => "ends before it starts",
        };
        write!(f, "{} '{}' {what}", self.entity, self.id)
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    projects: Vec<ProjectRecord>,
    skills: Vec<SkillRecord>,
    experience: Vec<ExperienceRecord>,
    education: Vec<EducationEntry>,
    profile: Option<PersonalInfo>,
    issues: Vec<ConsistencyIssue>,
}

impl RecordStore {
    /// Load every dataset file from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let dir = dir.as_ref();

        let projects: Vec<ProjectRecord> = read_json(&dir.join(PROJECTS_FILE))?;
        let skills: Vec<SkillRecord> = read_json(&dir.join(SKILLS_FILE))?;
        let experience: Vec<ExperienceRecord> = read_json(&dir.join(EXPERIENCE_FILE))?;
        let raw_education: Vec<RawEducationRecord> = read_json(&dir.join(EDUCATION_FILE))?;
        let education = raw_education
            .into_iter()
            .map(EducationEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let personal_path = dir.join(PERSONAL_FILE);
        let profile = if personal_path.exists() {
            Some(read_json(&personal_path)?)
        } else {
            tracing::warn!(path = %personal_path.display(), "No profile dataset, continuing without it");
            None
        };

        let store = Self::from_records(projects, skills, experience, education, profile)?;

        tracing::info!(
            dir = %dir.display(),
            projects = store.projects.len(),
            skills = store.skills.len(),
            experience = store.experience.len(),
            education = store.education.len(),
            "Record store loaded",
        );

        Ok(store)
    }

    /// Build a store from already-parsed records, running the same checks as
    /// [`RecordStore::load_from_dir`].
    pub fn from_records(
        projects: Vec<ProjectRecord>,
        skills: Vec<SkillRecord>,
        experience: Vec<ExperienceRecord>,
        education: Vec<EducationEntry>,
        profile: Option<PersonalInfo>,
    ) -> Result<Self, DataLoadError> {
        ensure_unique_ids("project", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("skill", skills.iter().map(|s| s.id.as_str()))?;
        ensure_unique_ids("experience", experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("education", education.iter().map(EducationEntry::id))?;
        skills.iter().try_for_each(ensure_valid_years)?;

        let mut store = Self {
            projects,
            skills,
            experience,
            education,
            profile,
            issues: Vec::new(),
        };
        store.issues = store.find_issues();
        for issue in &store.issues {
            tracing::warn!(entity = issue.entity, id = %issue.id, kind = ?issue.kind, "{issue}");
        }

        Ok(store)
    }

    // -- accessors ------------------------------------------------------------

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn experience(&self) -> &[ExperienceRecord] {
        &self.experience
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }

    pub fn profile(&self) -> Option<&PersonalInfo> {
        self.profile.as_ref()
    }

    pub fn consistency_issues(&self) -> &[ConsistencyIssue] {
        &self.issues
    }

    /// Look a project up by id.
    pub fn project(&self, id: &str) -> Result<&ProjectRecord, CoreError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })
    }

    /// Featured projects in dataset order.
    pub fn featured_projects(&self) -> Vec<&ProjectRecord> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn degrees(&self) -> impl Iterator<Item = &Degree> {
        self.education.iter().filter_map(|e| match e {
            EducationEntry::Degree(d) => Some(d),
            EducationEntry::Certification(_) => None,
        })
    }

    pub fn certifications(&self) -> impl Iterator<Item = &Certification> {
        self.education.iter().filter_map(|e| match e {
            EducationEntry::Certification(c) => Some(c),
            EducationEntry::Degree(_) => None,
        })
    }

    // -- consistency ----------------------------------------------------------

    fn find_issues(&self) -> Vec<ConsistencyIssue> {
        let mut issues = Vec::new();
        let mut push = |entity: &'static str, id: &str, kind: IssueKind| {
            issues.push(ConsistencyIssue {
                entity,
                id: id.to_string(),
                kind,
            });
        };

        for p in &self.projects {
            if p.status == ProjectStatus::Completed && p.end_date.is_none() {
                push("project", &p.id, IssueKind::CompletedWithoutEndDate);
            }
            if p.end_date.is_some_and(|end| end < p.start_date) {
                push("project", &p.id, IssueKind::EndBeforeStart);
            }
        }
        for e in &self.experience {
            if e.current && e.end_date.is_some() {
                push("experience", &e.id, IssueKind::CurrentWithEndDate);
            }
            if e.end_date.is_some_and(|end| end < e.start_date) {
                push("experience", &e.id, IssueKind::EndBeforeStart);
            }
        }
        for d in self.degrees() {
            if d.current && d.end_date.is_some() {
                push("education", &d.id, IssueKind::CurrentWithEndDate);
            }
            if d.end_date.is_some_and(|end| end < d.start_date) {
                push("education", &d.id, IssueKind::EndBeforeStart);
            }
        }

        issues
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let bytes = fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_unique_ids<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataLoadError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataLoadError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn ensure_valid_years(skill: &SkillRecord) -> Result<(), DataLoadError> {
    let years = skill.years_of_experience;
    if years.is_finite() && years >= 0.0 {
        return Ok(());
    }
    Err(DataLoadError::InvalidRecord {
        entity: "skill",
        id: skill.id.clone(),
        reason: format!("yearsOfExperience must be a non-negative number, got {years}"),
    })
}
