use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pokedex: ClientConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    /// Request timeout in seconds. The transport default applies when unset.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    // Parses a `[pokedex]` table.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source).map_err(|e| {
            tracing::error!("Failed to parse client configuration: {}", e);
            Error::from(e)
        })?;
        Ok(config.pokedex)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            Error::Config(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(include_str!("../config/config.toml"))
    }

    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_points_at_pokeapi() {
        let config = ClientConfig::bundled().unwrap();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_timeout_and_trailing_slash() {
        let config = ClientConfig::from_toml_str(
            r#"
            [pokedex]
            api_url = "http://localhost:8080/api/v2/"
            timeout = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080/api/v2");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_config() {
        let err = ClientConfig::from_toml_str("[pokedex]\ntimeout = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientConfig::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
