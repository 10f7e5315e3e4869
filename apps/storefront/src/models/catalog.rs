//! Resume catalog — the immutable dataset behind the storefront page.
//!
//! Loaded once at startup from a JSON document, either the compiled-in
//! `data/resume.json` or an operator-supplied file, then validated and shared
//! read-only for the lifetime of the process.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::profile::Profile;
use crate::models::resume::{AchievementEntry, EducationEntry, ExtraEntry, Project, SkillGroup};

const BUILTIN_CATALOG: &str = include_str!("../../data/resume.json");

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("Duplicate skill group '{0}'")]
    DuplicateSkillGroup(String),

    #[error("Skill group '{group}' has rating {rating}, maximum is 5")]
    InvalidRating { group: String, rating: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub achievements: Vec<AchievementEntry>,
    #[serde(default)]
    pub extracurricular: Vec<ExtraEntry>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Loads the catalog from `path` when given, otherwise the builtin one.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading resume catalog from {}", path.display());
                let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json_str(&text)?
            }
            None => {
                info!("Loading builtin resume catalog");
                Self::builtin()?
            }
        };

        info!(
            projects = catalog.projects.len(),
            education = catalog.education.len(),
            skill_groups = catalog.skills.len(),
            achievements = catalog.achievements.len(),
            extracurricular = catalog.extracurricular.len(),
            "Resume catalog loaded for {}",
            catalog.profile.name
        );
        Ok(catalog)
    }

    /// Enforces id uniqueness per collection and the rating range.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("education", self.education.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids(
            "achievements",
            self.achievements.iter().map(|a| a.id.as_str()),
        )?;
        ensure_unique_ids(
            "extracurricular",
            self.extracurricular.iter().map(|x| x.id.as_str()),
        )?;

        let mut groups = HashSet::new();
        for group in &self.skills {
            if !groups.insert(group.name.as_str()) {
                return Err(CatalogError::DuplicateSkillGroup(group.name.clone()));
            }
            if group.rating > MAX_RATING {
                return Err(CatalogError::InvalidRating {
                    group: group.name.clone(),
                    rating: group.rating,
                });
            }
        }
        Ok(())
    }
}

fn ensure_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
