use serde::{Deserialize, Serialize};

/// Outbound link attached to a project card ("Live", "Source", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(default)]
    pub label: Option<String>,
    pub url: String,
}

impl ProjectLink {
    /// Label shown on the card button. Unlabelled links read "Live".
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => "Live",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Free-text date range, e.g. "Jan 2025 – May 2025".
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub period: String,
}

/// A named bucket of skills rendered as one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Stable group key: languages, web, tools, os, core.
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Star rating shown on the card, 0..=5.
    pub rating: u8,
    pub skills: Vec<String>,
}

/// Single-line entry used for achievements and extracurricular activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub id: String,
    pub text: String,
}

pub type AchievementEntry = TextEntry;
pub type ExtraEntry = TextEntry;
