/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Row of five stars, the first `filled` of them highlighted.
pub fn star_row(filled: u8) -> String {
    let filled = filled.min(5);
    let mut out = format!(r#"<div class="stars" aria-label="{filled} star rating">"#);
    for i in 0..5 {
        if i < filled {
            out.push_str(r#"<span class="star on">★</span>"#);
        } else {
            out.push_str(r#"<span class="star off">★</span>"#);
        }
    }
    out.push_str("</div>");
    out
}

/// Anchor opening in a new tab.
pub fn external_link(href: &str, class: &str, inner_html: &str) -> String {
    format!(
        r#"<a href="{}" class="{class}" target="_blank" rel="noreferrer">{inner_html}</a>"#,
        escape(href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<b>"Unix & Shell"</b> it's"#),
            "&lt;b&gt;&quot;Unix &amp; Shell&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn test_escape_passes_unicode() {
        assert_eq!(escape("Jan 2025 – May 2025 • ok"), "Jan 2025 – May 2025 • ok");
    }

    #[test]
    fn test_star_row_counts() {
        let row = star_row(4);
        assert!(row.contains(r#"aria-label="4 star rating""#));
        assert_eq!(row.matches("star on").count(), 4);
        assert_eq!(row.matches("star off").count(), 1);
    }

    #[test]
    fn test_star_row_clamps() {
        assert_eq!(star_row(9).matches("star on").count(), 5);
    }
}
