//! Derived figures shown alongside the catalog: time spans and skill totals.

use serde::Serialize;

use crate::grouping::group_skills_by_category;
use crate::skill::{SkillCategory, SkillLevel, SkillRecord};
use crate::types::Date;

/// Days per "month" when measuring project length.
const DAYS_PER_MONTH: i64 = 30;

/// Days per year when measuring experience.
const DAYS_PER_YEAR: f64 = 365.0;

/// Years between two dates, rounded to one decimal. Order-insensitive.
pub fn years_between(start: Date, end: Date) -> f64 {
    let days = (end - start).num_days().abs() as f64;
    (days / DAYS_PER_YEAR * 10.0).round() / 10.0
}

/// Started 30-day months from `start` to `end`; zero if `end` precedes `start`.
pub fn months_between(start: Date, end: Date) -> i64 {
    let days = (end - start).num_days().max(0);
    (days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH
}

// ---------------------------------------------------------------------------
// Skill summary
// ---------------------------------------------------------------------------

/// Per-category level counts for the skills overview cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLevelCounts {
    pub category: SkillCategory,
    pub total: usize,
    pub expert: usize,
    pub advanced: usize,
    pub intermediate: usize,
    pub beginner: usize,
}

/// Headline numbers for the skills page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub total_skills: usize,
    pub expert_skills: usize,
    pub total_years: f64,
    /// One entry per category present, in first-seen order.
    pub categories: Vec<CategoryLevelCounts>,
}

impl SkillSummary {
    pub fn from_skills(skills: &[SkillRecord]) -> Self {
        let categories = group_skills_by_category(skills)
            .into_iter()
            .map(|(category, members)| {
                let count = |level: SkillLevel| members.iter().filter(|s| s.level == level).count();
                CategoryLevelCounts {
                    category,
                    total: members.len(),
                    expert: count(SkillLevel::Expert),
                    advanced: count(SkillLevel::Advanced),
                    intermediate: count(SkillLevel::Intermediate),
                    beginner: count(SkillLevel::Beginner),
                }
            })
            .collect();

        Self {
            total_skills: skills.len(),
            expert_skills: skills.iter().filter(|s| s.level == SkillLevel::Expert).count(),
            total_years: skills.iter().map(|s| s.years_of_experience).sum(),
            categories,
        }
    }
}
