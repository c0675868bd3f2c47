//! # Front-end configuration — `projectmanager.toml`
//!
//! Settings the web bundle needs before it can talk to the backend. The file is
//! embedded at build time; a missing or empty file is equivalent to the default
//! configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//! ```
//!
//! The default base URL can also be overridden at compile time with the
//! `PROJECTMANAGER_API_URL` environment variable.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Top-level configuration stored in `projectmanager.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectManagerConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin every request path is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("PROJECTMANAGER_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ProjectManagerConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "projectmanager.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ProjectManagerConfig::from_toml("").unwrap();
        assert_eq!(config, ProjectManagerConfig::default());
        assert_eq!(config.api.base_url, default_base_url());
    }

    #[test]
    fn test_parse_base_url() {
        let config = ProjectManagerConfig::from_toml(
            r#"
[api]
base_url = "https://pm.example.com/"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://pm.example.com/");
        assert_eq!(config.base_url(), "https://pm.example.com");
    }

    #[test]
    fn test_roundtrip() {
        let config = ProjectManagerConfig::default().with_base_url("http://10.0.0.2:9000");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url"));
        assert_eq!(ProjectManagerConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ProjectManagerConfig::from_toml("[api\nbase_url = 1").is_err());
    }

    #[test]
    fn test_filename() {
        assert_eq!(ProjectManagerConfig::filename(), "projectmanager.toml");
    }
}
