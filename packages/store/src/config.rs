//! # Console configuration: `console.toml` and build-time environment
//!
//! The browser has no process environment, so the API location is baked in at
//! build time from `GARDENS_API_URL`. The web crate bundles a `console.toml`
//! whose fields, when present, take precedence:
//!
//! ```toml
//! api_url = "https://huertas.example.org"
//! development = false
//! ```
//!
//! All fields have defaults so a missing or empty file is equivalent to
//! [`AppConfig::default`].

use serde::{Deserialize, Serialize};

/// Prefix under which every REST endpoint lives.
pub const API_PREFIX: &str = "/api/v1";

/// Key under which the profile is persisted in browser storage.
pub const STORAGE_PROFILE_KEY: &str = "AgroecologiaIoT.PROFILE";
/// Key under which the bearer token is persisted in browser storage.
pub const STORAGE_JWT_KEY: &str = "AgroecologiaIoT.JWT";
/// Key under which the token expiry is persisted in browser storage.
pub const STORAGE_EXPIRE_KEY: &str = "AgroecologiaIoT.EXPIRE";

const DEFAULT_API_URL: &str = "http://localhost:3000";

fn default_api_url() -> String {
    option_env!("GARDENS_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// Runtime configuration of the console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server origin, without the `/api/v1` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_development", rename = "development")]
    pub is_development: bool,
}

fn default_development() -> bool {
    cfg!(debug_assertions)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            is_development: default_development(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "console.toml"
    }

    /// Build the configuration for a page served from `hostname`.
    ///
    /// Pages served from `localhost` always run in development mode.
    pub fn for_hostname(hostname: &str) -> Self {
        let mut config = Self::default();
        config.is_development |= hostname == "localhost";
        config
    }

    /// Parse the bundled config file, then apply the hostname rule of
    /// [`AppConfig::for_hostname`].
    pub fn load(file: &str, hostname: Option<&str>) -> Result<Self, toml::de::Error> {
        let mut config = Self::from_toml(file)?;
        config.is_development |= hostname == Some("localhost");
        Ok(config)
    }

    /// Base URL for REST calls, e.g. `http://localhost:3000/api/v1`.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), API_PREFIX)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// Hostname of the page the console is served from, when running in a browser.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn current_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn current_hostname() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_appends_prefix_once() {
        let config = AppConfig {
            api_url: "https://huertas.example.org/".to_string(),
            is_development: false,
        };
        assert_eq!(config.api_base(), "https://huertas.example.org/api/v1");
    }

    #[test]
    fn localhost_forces_development() {
        assert!(AppConfig::for_hostname("localhost").is_development);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = AppConfig::from_toml(
            "api_url = \"https://huertas.example.org\"\ndevelopment = true\n",
        )
        .unwrap();
        assert_eq!(config.api_url, "https://huertas.example.org");
        assert!(config.is_development);
    }

    #[test]
    fn loaded_file_keeps_build_defaults_for_missing_fields() {
        let config = AppConfig::load("development = false\n", Some("huertas.example.org")).unwrap();
        assert_eq!(config.api_url, AppConfig::default().api_url);
        assert!(!config.is_development);
    }

    #[test]
    fn loaded_file_on_localhost_is_development() {
        let config = AppConfig::load("development = false\n", Some("localhost")).unwrap();
        assert!(config.is_development);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(AppConfig::load("api_url = ", None).is_err());
    }
}
