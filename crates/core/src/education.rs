//! Degrees and certifications.
//!
//! `education.json` mixes both kinds in one flat list: a record carrying an
//! `issuer` is a certification, anything else is a degree. The flat shape is
//! read into [`RawEducationRecord`] and converted once, at load time, into the
//! tagged [`EducationEntry`]; nothing downstream inspects field presence.

use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;
use crate::types::{parse_date, Date};

const ENTITY: &str = "education";

// ---------------------------------------------------------------------------
// Typed variants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(with = "crate::types::date")]
    pub start_date: Date,
    #[serde(with = "crate::types::optional_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    pub current: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    #[serde(with = "crate::types::date")]
    pub issue_date: Date,
    #[serde(with = "crate::types::optional_date", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    pub description: String,
}

/// One entry of the education dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EducationEntry {
    Degree(Degree),
    Certification(Certification),
}

impl EducationEntry {
    pub fn id(&self) -> &str {
        match self {
            Self::Degree(d) => &d.id,
            Self::Certification(c) => &c.id,
        }
    }
}

// ---------------------------------------------------------------------------
// Flat on-disk shape
// ---------------------------------------------------------------------------

/// The flat record as it appears in `education.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEducationRecord {
    pub id: String,
    // Certification fields.
    pub issuer: Option<String>,
    pub name: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    // Degree fields.
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub gpa: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    // Shared.
    #[serde(default)]
    pub description: String,
}

impl TryFrom<RawEducationRecord> for EducationEntry {
    type Error = DataLoadError;

    fn try_from(raw: RawEducationRecord) -> Result<Self, Self::Error> {
        let id = raw.id.clone();
        let invalid = |reason: String| DataLoadError::InvalidRecord {
            entity: ENTITY,
            id: id.clone(),
            reason,
        };
        let required = |value: Option<String>, field: &str| {
            value.ok_or_else(|| invalid(format!("missing required field '{field}'")))
        };
        let date = |value: Option<String>, field: &str| -> Result<Option<Date>, DataLoadError> {
            match value {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => parse_date(&raw)
                    .map(Some)
                    .ok_or_else(|| invalid(format!("invalid date '{raw}' in '{field}'"))),
            }
        };

        match raw.issuer {
            Some(issuer) => Ok(Self::Certification(Certification {
                id: raw.id,
                name: required(raw.name, "name")?,
                issuer,
                issue_date: required(raw.issue_date, "issueDate")
                    .and_then(|d| date(Some(d), "issueDate"))?
                    .ok_or_else(|| invalid("missing required field 'issueDate'".into()))?,
                expiry_date: date(raw.expiry_date, "expiryDate")?,
                credential_id: raw.credential_id,
                credential_url: raw.credential_url,
                description: raw.description,
            })),
            None => Ok(Self::Degree(Degree {
                id: raw.id,
                institution: required(raw.institution, "institution")?,
                degree: required(raw.degree, "degree")?,
                field: required(raw.field, "field")?,
                start_date: date(raw.start_date, "startDate")?
                    .ok_or_else(|| invalid("missing required field 'startDate'".into()))?,
                end_date: date(raw.end_date, "endDate")?,
                current: raw.current,
                description: raw.description,
                gpa: raw.gpa,
                location: raw.location.unwrap_or_default(),
                website: raw.website,
            })),
        }
    }
}
