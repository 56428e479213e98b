//! Grouping aggregator: partition records by a categorical key.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::skill::{SkillCategory, SkillRecord};

/// Partition `items` by `key`, keeping first-seen key order and input order
/// within each partition. Keys with no items never appear.
pub fn group_by<K, T, I, F>(items: I, mut key: F) -> IndexMap<K, Vec<T>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Group skills by category, each group ordered by proficiency, expert first.
///
/// Equal levels keep their input order.
pub fn group_skills_by_category<'a, I>(skills: I) -> IndexMap<SkillCategory, Vec<&'a SkillRecord>>
where
    I: IntoIterator<Item = &'a SkillRecord>,
{
    let mut groups = group_by(skills, |s| s.category);
    for members in groups.values_mut() {
        members.sort_by(|a, b| b.level.cmp(&a.level));
    }
    groups
}
