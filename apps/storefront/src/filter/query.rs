/// Trims surrounding whitespace and lowercases the raw search string.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize_query("  ReAct \t"), "react");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(normalize_query(" \n "), "");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        assert_eq!(normalize_query(" Spring Boot "), "spring boot");
    }
}
