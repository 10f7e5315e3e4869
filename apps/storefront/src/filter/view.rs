//! View state and the derived listing.
//!
//! `ViewState` is the whole session state of the page: the raw search string
//! and the enabled categories. Transitions return new values, and `listing`
//! re-derives everything the main area shows from a state and the catalog.

use serde::Serialize;

use crate::filter::categories::{
    all_categories, encode_categories, parse_categories, toggle_category, ActiveCategories,
    CategoryKey, UnknownCategory,
};
use crate::filter::projects::filter_projects;
use crate::filter::query::normalize_query;
use crate::filter::skills::{any_results, filter_skill_groups, SkillMatches};
use crate::models::{AchievementEntry, Catalog, EducationEntry, ExtraEntry, Project};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    active: ActiveCategories,
}

impl Default for ViewState {
    /// Empty query with every category enabled.
    fn default() -> Self {
        Self {
            query: String::new(),
            active: all_categories(),
        }
    }
}

impl ViewState {
    pub fn new(query: impl Into<String>, active: ActiveCategories) -> Self {
        Self {
            query: query.into(),
            active,
        }
    }

    /// Builds a state from URL parameters. A missing `cats` means every
    /// category; a present but empty one means none.
    pub fn from_params(q: Option<&str>, cats: Option<&str>) -> Result<Self, UnknownCategory> {
        let base = match cats {
            Some(raw) => Self::new(String::new(), parse_categories(raw)?),
            None => Self::default(),
        };
        Ok(match q {
            Some(q) => base.with_query(q),
            None => base,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active(&self) -> &ActiveCategories {
        &self.active
    }

    pub fn is_active(&self, key: CategoryKey) -> bool {
        self.active.contains(&key)
    }

    pub fn all_active(&self) -> bool {
        self.active.len() == CategoryKey::ALL.len()
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(query, self.active.clone())
    }

    pub fn toggle_category(&self, key: CategoryKey) -> Self {
        Self::new(self.query.clone(), toggle_category(&self.active, key))
    }

    /// `cats` parameter value, or `None` when every category is active.
    pub fn cats_param(&self) -> Option<String> {
        (!self.all_active()).then(|| encode_categories(&self.active))
    }

    /// Canonical query string including the leading `?`, empty for the
    /// default state.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push(format!("q={}", urlencoding::encode(&self.query)));
        }
        if let Some(cats) = self.cats_param() {
            params.push(format!("cats={cats}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// One rendered section of the main listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Section<'a> {
    Projects {
        result_count: usize,
        projects: Vec<&'a Project>,
    },
    Education {
        entries: &'a [EducationEntry],
    },
    Skills {
        any_results: bool,
        groups: Vec<SkillMatches<'a>>,
    },
    Achievements {
        entries: &'a [AchievementEntry],
    },
    Extracurricular {
        entries: &'a [ExtraEntry],
    },
}

impl Section<'_> {
    pub fn key(&self) -> CategoryKey {
        match self {
            Section::Projects { .. } => CategoryKey::Projects,
            Section::Education { .. } => CategoryKey::Education,
            Section::Skills { .. } => CategoryKey::Skills,
            Section::Achievements { .. } => CategoryKey::Achievements,
            Section::Extracurricular { .. } => CategoryKey::Extracurricular,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView<'a> {
    pub query: String,
    pub normalized_query: String,
    pub sections: Vec<Section<'a>>,
}

/// Derives the main listing for `state`: one section per active category in
/// display order. Only projects and skills respond to the query.
pub fn listing<'a>(catalog: &'a Catalog, state: &ViewState) -> ListingView<'a> {
    let sections = state
        .active()
        .iter()
        .map(|key| match key {
            CategoryKey::Projects => {
                let projects = filter_projects(&catalog.projects, state.query());
                Section::Projects {
                    result_count: projects.len(),
                    projects,
                }
            }
            CategoryKey::Education => Section::Education {
                entries: &catalog.education,
            },
            CategoryKey::Skills => {
                let groups = filter_skill_groups(&catalog.skills, state.query());
                Section::Skills {
                    any_results: any_results(&groups),
                    groups,
                }
            }
            CategoryKey::Achievements => Section::Achievements {
                entries: &catalog.achievements,
            },
            CategoryKey::Extracurricular => Section::Extracurricular {
                entries: &catalog.extracurricular,
            },
        })
        .collect();

    ListingView {
        query: state.query().to_string(),
        normalized_query: normalize_query(state.query()),
        sections,
    }
}
