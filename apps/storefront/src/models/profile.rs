use serde::{Deserialize, Serialize};

/// Contact and branding details of the resume owner. Singleton per catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Logo-style short name in the header, followed by `brand_suffix`.
    pub brand: String,
    #[serde(default)]
    pub brand_suffix: String,
    pub role: String,
    pub location: String,
    /// City shown in the "Delivering from" strip. Falls back to `location`.
    #[serde(default)]
    pub city: Option<String>,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub search_placeholder: Option<String>,
}

impl Profile {
    pub fn delivery_city(&self) -> &str {
        self.city.as_deref().unwrap_or(&self.location)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `mailto:` link with a pre-filled subject, e.g. for the "Hire Me" button.
    pub fn mailto_with_subject(&self, subject: &str) -> String {
        format!(
            "mailto:{}?subject={}",
            self.email,
            urlencoding::encode(subject)
        )
    }
}
