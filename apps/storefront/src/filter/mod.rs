// Filter Engine
// Pure, synchronous derivation of the visible listing from (query, active categories).
// Recomputed on every request; nothing here is cached or mutated.

pub mod categories;
pub mod projects;
pub mod query;
pub mod skills;
pub mod view;

pub use categories::{toggle_category, ActiveCategories, CategoryKey, UnknownCategory};
pub use projects::filter_projects;
pub use skills::{any_results, filter_skill_groups, SkillMatches};
pub use view::{listing, ListingView, Section, ViewState};
