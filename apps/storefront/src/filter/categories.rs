use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five listing sections. Declaration order is display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Projects,
    Education,
    Skills,
    Achievements,
    Extracurricular,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 5] = [
        CategoryKey::Projects,
        CategoryKey::Education,
        CategoryKey::Skills,
        CategoryKey::Achievements,
        CategoryKey::Extracurricular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Projects => "projects",
            CategoryKey::Education => "education",
            CategoryKey::Skills => "skills",
            CategoryKey::Achievements => "achievements",
            CategoryKey::Extracurricular => "extracurricular",
        }
    }

    /// Chip label in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Projects => "Projects",
            CategoryKey::Education => "Education",
            CategoryKey::Skills => "Skills",
            CategoryKey::Achievements => "Achievements",
            CategoryKey::Extracurricular => "Extracurricular",
        }
    }

    /// Section heading in the main listing.
    pub fn heading(&self) -> &'static str {
        match self {
            CategoryKey::Achievements => "Achievements & Certifications",
            other => other.label(),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryKey {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Set of enabled categories. Iterates in display order.
pub type ActiveCategories = BTreeSet<CategoryKey>;

pub fn all_categories() -> ActiveCategories {
    CategoryKey::ALL.into_iter().collect()
}

/// Returns a new set with `key` removed if present, added otherwise.
/// The empty set is a legal result.
pub fn toggle_category(active: &ActiveCategories, key: CategoryKey) -> ActiveCategories {
    let mut next = active.clone();
    if !next.remove(&key) {
        next.insert(key);
    }
    next
}

/// Parses a comma-separated key list. Blank segments are skipped, so an
/// empty string yields the empty set.
pub fn parse_categories(raw: &str) -> Result<ActiveCategories, UnknownCategory> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CategoryKey::from_str)
        .collect()
}

pub fn encode_categories(active: &ActiveCategories) -> String {
    active
        .iter()
        .map(CategoryKey::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use CategoryKey::*;

    fn set(keys: &[CategoryKey]) -> ActiveCategories {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_toggle_removes_present_key() {
        assert_eq!(toggle_category(&set(&[Projects, Skills]), Projects), set(&[Skills]));
    }

    #[test]
    fn test_toggle_adds_absent_key() {
        assert_eq!(
            toggle_category(&set(&[Skills]), Projects),
            set(&[Projects, Skills])
        );
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let original = set(&[Education, Achievements]);
        for key in CategoryKey::ALL {
            let twice = toggle_category(&toggle_category(&original, key), key);
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let original = set(&[Projects]);
        let _ = toggle_category(&original, Projects);
        assert_eq!(original, set(&[Projects]));
    }

    #[test]
    fn test_all_can_be_deselected() {
        let mut active = all_categories();
        for key in CategoryKey::ALL {
            active = toggle_category(&active, key);
        }
        assert!(active.is_empty());
    }

    #[test]
    fn test_parse_and_encode() {
        let parsed = parse_categories("skills, projects,,").unwrap();
        assert_eq!(parsed, set(&[Projects, Skills]));
        assert_eq!(encode_categories(&parsed), "projects,skills");
        assert!(parse_categories("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert_eq!(
            parse_categories("projects,hobbies"),
            Err(UnknownCategory("hobbies".to_string()))
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(Achievements.heading(), "Achievements & Certifications");
        assert_eq!(Extracurricular.heading(), "Extracurricular");
        assert_eq!(Projects.to_string(), "projects");
    }
}
