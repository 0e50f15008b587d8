// api.rs
// Raw shapes shared by every resource the API returns, and the trait tying a
// resource kind to its endpoint and mapper.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiResource {
    pub url: String,
}

impl ApiResource {
    /// The last non-empty path segment of the reference, `120` for
    /// `https://pokeapi.co/api/v2/machine/120/`.
    pub fn terminal_segment(&self) -> Option<&str> {
        terminal_segment(&self.url)
    }

    pub(crate) fn id(&self, kind: &'static str) -> Result<u32> {
        self.terminal_segment()
            .and_then(|segment| segment.parse().ok())
            .ok_or_else(|| Error::malformed(kind, format!("no numeric id in {}", self.url)))
    }
}

pub fn terminal_segment(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ApiName {
    pub name: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ApiFlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    #[serde(default)]
    pub version: Option<NamedApiResource>,
    #[serde(default)]
    pub version_group: Option<NamedApiResource>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ApiGenus {
    pub genus: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ApiDescription {
    pub description: String,
    pub language: NamedApiResource,
}

/// A resource kind served at `<base-url>/<ENDPOINT>/<name-or-id>/`.
pub trait Resource: Sized {
    const ENDPOINT: &'static str;

    /// Raw shape of the JSON document.
    type Api: DeserializeOwned;

    fn from_api(api: Self::Api) -> Result<Self>;

    fn from_json(document: Value) -> Result<Self> {
        Self::from_api(decode(Self::ENDPOINT, document)?)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(kind: &'static str, document: Value) -> Result<T> {
    serde_json::from_value(document).map_err(|e| Error::malformed(kind, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_segment() {
        assert_eq!(
            terminal_segment("https://pokeapi.co/api/v2/machine/120/"),
            Some("120")
        );
        assert_eq!(terminal_segment("https://pokeapi.co/api/v2/machine/7"), Some("7"));
        assert_eq!(terminal_segment(""), None);

        let machine = ApiResource {
            url: "https://pokeapi.co/api/v2/machine/abc/".to_string(),
        };
        assert!(matches!(
            machine.id("move"),
            Err(Error::MalformedResource { kind: "move", .. })
        ));
    }
}
