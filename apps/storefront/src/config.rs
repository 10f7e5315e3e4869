use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog to serve instead of the compiled-in resume.
    pub resume_data_path: Option<PathBuf>,
    /// PDF served by `/resume.pdf`. Without it the endpoint returns a notice.
    pub resume_pdf_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            resume_data_path: None,
            resume_pdf_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            resume_data_path: optional_path(&lookup, "RESUME_DATA_PATH"),
            resume_pdf_path: optional_path(&lookup, "RESUME_PDF_PATH"),
        })
    }
}

fn optional_path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.resume_data_path.is_none());
        assert!(config.resume_pdf_path.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("RESUME_DATA_PATH", "/srv/resume.json"),
            ("RESUME_PDF_PATH", "/srv/resume.pdf"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.resume_data_path, Some(PathBuf::from("/srv/resume.json")));
        assert_eq!(config.resume_pdf_path, Some(PathBuf::from("/srv/resume.pdf")));
    }

    #[test]
    fn test_blank_paths_are_ignored() {
        let config = Config::from_lookup(lookup(&[("RESUME_PDF_PATH", "  ")])).unwrap();
        assert!(config.resume_pdf_path.is_none());
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
    }
}
