//! Storefront page — renders the resume as a product listing.
//!
//! Layout mirrors a shop front: a dark top bar with the brand and search form,
//! a sub-bar with contact details, a "Departments" sidebar holding one chip per
//! category, the listing itself, and a footer. All state lives in the URL, so
//! each chip is a link to the same page with that category toggled.

use crate::filter::{listing, CategoryKey, Section, SkillMatches, ViewState};
use crate::models::{Catalog, Profile, Project};
use crate::render::html::{escape, external_link, star_row};

const STYLE: &str = include_str!("style.css");

/// Shown whenever the resume download has no file behind it.
pub const DOWNLOAD_NOTICE: &str =
    "Export to PDF/Download can be wired to your hosted file or a generator.";

pub const NO_SKILLS_MESSAGE: &str = "No skills match your search. Try a different query.";

pub const DOWNLOAD_PATH: &str = "/resume.pdf";

/// Per-request inputs that are not part of the view state.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// Year printed in the copyright line.
    pub year: i32,
    /// Whether `/resume.pdf` serves a real file.
    pub download_available: bool,
}

pub fn render_page(catalog: &Catalog, state: &ViewState, options: PageOptions) -> String {
    let profile = &catalog.profile;
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "<title>{} — {}</title>\n",
        escape(&profile.name),
        escape(&profile.role)
    ));
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&render_header(profile, state));
    html.push_str(&render_subbar(profile));

    html.push_str("<main class=\"wrap layout\">\n");
    html.push_str(&render_sidebar(profile, state, options));
    html.push_str("<section class=\"listing\">\n");
    for section in listing(catalog, state).sections {
        html.push_str(&render_section(profile, &section));
    }
    html.push_str("</section>\n</main>\n");

    html.push_str(&render_footer(profile, options.year));
    html.push_str("</body>\n</html>\n");
    html
}

// ────────────────────────────────────────────────────────────────────────────
// Chrome: header, sub-bar, sidebar, footer
// ────────────────────────────────────────────────────────────────────────────

fn render_header(profile: &Profile, state: &ViewState) -> String {
    let placeholder = match profile.search_placeholder.as_deref() {
        Some(p) => p.to_string(),
        None => format!("Search {}'s skills & experience", profile.brand),
    };
    // Keep the current category selection across searches.
    let hidden_cats = state
        .cats_param()
        .map(|cats| {
            format!(
                r#"<input type="hidden" name="cats" value="{}">"#,
                escape(&cats)
            )
        })
        .unwrap_or_default();

    let mut out = String::from("<header class=\"topbar\"><div class=\"wrap\">\n");
    out.push_str(&format!(
        r#"<a class="brand" href="/">{}<span class="accent">{}</span></a>"#,
        escape(&profile.brand),
        escape(&profile.brand_suffix)
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<form class="search" method="get" action="/" role="search"><span class="scope">All</span><input type="search" name="q" value="{}" placeholder="{}" aria-label="Search">{hidden_cats}<button type="submit">Search</button></form>"#,
        escape(state.query()),
        escape(&placeholder)
    ));
    out.push('\n');
    out.push_str("<nav class=\"actions\">");
    out.push_str(&format!(
        r#"<a href="{}" title="Email">✉</a>"#,
        escape(&profile.mailto())
    ));
    out.push_str(&external_link(&profile.github, "", "GitHub"));
    out.push_str(&external_link(&profile.linkedin, "", "LinkedIn"));
    out.push_str(&format!(
        r#"<a href="{}" title="Hire Me">🛒</a>"#,
        escape(&profile.mailto_with_subject("Hiring"))
    ));
    out.push_str("</nav>\n</div></header>\n");
    out
}

fn render_subbar(profile: &Profile) -> String {
    let mut out = String::from("<div class=\"subbar\"><div class=\"wrap\">");
    out.push_str(&format!(
        "<span>📍 Delivering from <b>{}</b></span>",
        escape(profile.delivery_city())
    ));
    if let Some(availability) = &profile.availability {
        out.push_str(&format!(
            "<span class=\"dim\">{}</span>",
            escape(availability)
        ));
    }
    out.push_str(&format!(
        "<span class=\"dim\">Call: {}</span><span class=\"dim\">Email: {}</span>",
        escape(&profile.phone),
        escape(&profile.email)
    ));
    out.push_str("</div></div>\n");
    out
}

fn render_sidebar(profile: &Profile, state: &ViewState, options: PageOptions) -> String {
    let mut out = String::from("<aside class=\"panel\">\n<h2>Departments</h2>\n<div class=\"chips\">");
    for key in CategoryKey::ALL {
        let active = state.is_active(key);
        let href = format!("/{}", state.toggle_category(key).to_query_string());
        out.push_str(&format!(
            r#"<a class="chip{}" href="{}" aria-pressed="{active}">{}</a>"#,
            if active { " active" } else { "" },
            escape(&href),
            key.label()
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"block\"><h3>Quick Links</h3><div class=\"quick\">");
    out.push_str(&external_link(&profile.linkedin, "", "↗ LinkedIn"));
    out.push_str(&external_link(&profile.github, "", "↗ GitHub"));
    out.push_str(&format!(
        r#"<a href="{}">↗ Email</a>"#,
        escape(&profile.mailto())
    ));
    out.push_str("</div></div>\n");

    out.push_str("<div class=\"block\"><h3>Download</h3>");
    if options.download_available {
        out.push_str(&format!(
            r#"<a class="button amber" href="{DOWNLOAD_PATH}">⬇ Resume (PDF)</a>"#
        ));
    } else {
        out.push_str(&format!(
            r#"<a class="button amber" href="{DOWNLOAD_PATH}" title="{notice}">⬇ Resume (PDF)</a><p class="notice">{notice}</p>"#,
            notice = escape(DOWNLOAD_NOTICE)
        ));
    }
    out.push_str("</div>\n</aside>\n");
    out
}

fn render_footer(profile: &Profile, year: i32) -> String {
    let mut out = String::from("<footer class=\"footer\"><div class=\"wrap\">\n");
    out.push_str("<div class=\"contact\"><b>Contact:</b>");
    out.push_str(&format!(
        r#"<a href="{}">✉ {}</a>"#,
        escape(&profile.mailto()),
        escape(&profile.email)
    ));
    out.push_str(&format!("<span>☎ {}</span>", escape(&profile.phone)));
    out.push_str(&external_link(&profile.linkedin, "", "LinkedIn"));
    out.push_str(&external_link(&profile.github, "", "GitHub"));
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"fine\">© {year} {} — Amazon-style interactive resume.</div>\n",
        escape(&profile.name)
    ));
    out.push_str("</div></footer>\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Listing sections
// ────────────────────────────────────────────────────────────────────────────

struct Card<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    period: Option<&'a str>,
    bullets: &'a [String],
    rating: u8,
    footer: Option<String>,
    cta: Option<String>,
}

impl<'a> Card<'a> {
    fn titled(title: &'a str, rating: u8) -> Self {
        Self {
            title,
            subtitle: None,
            period: None,
            bullets: &[],
            rating,
            footer: None,
            cta: None,
        }
    }
}

fn render_card(card: &Card<'_>) -> String {
    let mut out = String::from("<div class=\"card\"><div class=\"card-head\"><div>");
    out.push_str(&format!("<h3>{}</h3>", escape(card.title)));
    if let Some(subtitle) = card.subtitle.filter(|s| !s.is_empty()) {
        out.push_str(&format!("<p class=\"sub\">{}</p>", escape(subtitle)));
    }
    if let Some(period) = card.period.filter(|s| !s.is_empty()) {
        out.push_str(&format!("<p class=\"period\">{}</p>", escape(period)));
    }
    out.push_str("</div>");
    out.push_str(&star_row(card.rating));
    out.push_str("</div>");

    if !card.bullets.is_empty() {
        out.push_str("<ul>");
        for bullet in card.bullets {
            out.push_str(&format!("<li>{}</li>", escape(bullet)));
        }
        out.push_str("</ul>");
    }
    if let Some(footer) = &card.footer {
        out.push_str(footer);
    }
    if let Some(cta) = &card.cta {
        out.push_str(&format!("<div class=\"cta\">{cta}</div>"));
    }
    out.push_str("</div>\n");
    out
}

fn render_section(profile: &Profile, section: &Section<'_>) -> String {
    let key = section.key();
    let mut out = format!("<section class=\"dept\" id=\"{}\">\n", key.as_str());

    match section {
        Section::Projects {
            result_count,
            projects,
        } => {
            out.push_str(&format!(
                "<div class=\"dept-head\"><h2>{}</h2><div class=\"count\">Showing {result_count} results</div></div>\n",
                escape(key.heading())
            ));
            out.push_str("<div class=\"grid two\">\n");
            for project in projects {
                out.push_str(&render_project(profile, project));
            }
            out.push_str("</div>\n");
        }
        Section::Education { entries } => {
            out.push_str(&format!("<h2>{}</h2>\n<div class=\"grid\">\n", escape(key.heading())));
            for entry in entries.iter() {
                out.push_str(&render_card(&Card {
                    subtitle: Some(entry.subtitle.as_str()),
                    period: Some(entry.period.as_str()),
                    ..Card::titled(&entry.title, 5)
                }));
            }
            out.push_str("</div>\n");
        }
        Section::Skills {
            any_results,
            groups,
        } => {
            out.push_str(&format!("<h2>{}</h2>\n", escape(key.heading())));
            if *any_results {
                out.push_str("<div class=\"grid\">\n");
                for group in groups {
                    out.push_str(&render_skill_group(group));
                }
                out.push_str("</div>\n");
            } else {
                out.push_str(&format!("<p class=\"empty\">{NO_SKILLS_MESSAGE}</p>\n"));
            }
        }
        Section::Achievements { entries } => {
            out.push_str(&format!("<h2>{}</h2>\n<div class=\"grid\">\n", escape(key.heading())));
            for entry in entries.iter() {
                out.push_str(&render_card(&Card::titled(&entry.text, 5)));
            }
            out.push_str("</div>\n");
        }
        Section::Extracurricular { entries } => {
            out.push_str(&format!("<h2>{}</h2>\n<div class=\"grid\">\n", escape(key.heading())));
            for entry in entries.iter() {
                out.push_str(&render_card(&Card::titled(&entry.text, 4)));
            }
            out.push_str("</div>\n");
        }
    }

    out.push_str("</section>\n");
    out
}

fn render_project(profile: &Profile, project: &Project) -> String {
    let mut cta = String::new();
    for link in &project.links {
        cta.push_str(&external_link(
            &link.url,
            "button dark",
            &format!("↗ {}", escape(link.display_label())),
        ));
    }
    let hire = profile.mailto_with_subject(&format!("Regarding {}", project.title));
    cta.push_str(&format!(
        r#"<a class="button amber" href="{}">🛒 Hire Me</a>"#,
        escape(&hire)
    ));

    render_card(&Card {
        subtitle: Some(project.subtitle.as_str()),
        period: Some(project.period.as_str()),
        bullets: &project.bullets,
        cta: Some(cta),
        ..Card::titled(&project.title, 5)
    })
}

fn render_skill_group(group: &SkillMatches<'_>) -> String {
    let mut tags = String::from("<div class=\"tags\">");
    for skill in &group.skills {
        tags.push_str(&format!("<span class=\"tag\">{}</span>", escape(skill)));
    }
    tags.push_str("</div>");

    render_card(&Card {
        subtitle: group.summary,
        footer: Some(tags),
        ..Card::titled(group.title, group.rating)
    })
}
