use serde::Serialize;

use crate::filter::query::normalize_query;
use crate::models::SkillGroup;

/// One skill group after filtering. The group itself is always present,
/// only its `skills` shrink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMatches<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub summary: Option<&'a str>,
    pub rating: u8,
    pub skills: Vec<&'a str>,
}

impl<'a> SkillMatches<'a> {
    fn unfiltered(group: &'a SkillGroup) -> Self {
        Self::with_skills(group, group.skills.iter().map(String::as_str).collect())
    }

    fn with_skills(group: &'a SkillGroup, skills: Vec<&'a str>) -> Self {
        Self {
            name: &group.name,
            title: &group.title,
            summary: group.summary.as_deref(),
            rating: group.rating,
            skills,
        }
    }
}

/// Filters every group independently, keeping skills whose lowercase form
/// contains the normalized query. An empty query keeps everything.
pub fn filter_skill_groups<'a>(groups: &'a [SkillGroup], query: &str) -> Vec<SkillMatches<'a>> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return groups.iter().map(SkillMatches::unfiltered).collect();
    }
    groups
        .iter()
        .map(|group| {
            let skills = group
                .skills
                .iter()
                .filter(|s| s.to_lowercase().contains(&needle))
                .map(String::as_str)
                .collect();
            SkillMatches::with_skills(group, skills)
        })
        .collect()
}

/// True iff at least one filtered group still has a skill.
pub fn any_results(groups: &[SkillMatches<'_>]) -> bool {
    groups.iter().any(|g| !g.skills.is_empty())
}
