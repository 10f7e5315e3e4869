pub mod catalog;
pub mod profile;
pub mod resume;

pub use catalog::{Catalog, CatalogError};
pub use profile::Profile;
pub use resume::{AchievementEntry, EducationEntry, ExtraEntry, Project, SkillGroup};
