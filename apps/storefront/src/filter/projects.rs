use crate::filter::query::normalize_query;
use crate::models::Project;

/// Returns the projects whose searchable text contains the normalized query.
///
/// An empty query returns every project. Matching is plain case-insensitive
/// substring containment over title, subtitle, period and bullets joined by
/// single spaces. Order is preserved.
pub fn filter_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| searchable_text(p).contains(&needle))
        .collect()
}

fn searchable_text(project: &Project) -> String {
    [&project.title, &project.subtitle, &project.period]
        .into_iter()
        .chain(project.bullets.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
