// client.rs
// Fetches resources from the API and maps them into typed values.

use serde_json::Value;

use crate::ability::Ability;
use crate::api::Resource;
use crate::config::ClientConfig;
use crate::encounter::{Encounter, encounters_from_json, encounters_path};
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::pokemon::Pokemon;
use crate::species::PokemonSpecies;
use crate::version::Loadable;

/// Asynchronous client. Every call issues exactly one request and builds a
/// fresh value; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            config: ClientConfig::default(),
        }
    }
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport {
                url: config.base_url().to_string(),
                source: e,
            }
        })?;
        tracing::debug!("Created client for {}", config.base_url());
        Ok(Self { http, config })
    }

    /// Uses a preconfigured `reqwest::Client`; `config.timeout` is ignored.
    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/", self.config.base_url(), path.trim_matches('/'))
    }

    /// Issues `GET <base-url>/<path>/` and parses the body as JSON.
    pub async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!("Fetching resource from URL: {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            Error::Transport {
                url: url.clone(),
                source: e,
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("No resource at {}", url);
            return Err(Error::not_found(path));
        }

        let response = response.error_for_status().map_err(|e| {
            tracing::error!("API request to {} failed with status: {:?}", url, e.status());
            Error::Transport {
                url: url.clone(),
                source: e,
            }
        })?;

        response.json::<Value>().await.map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            Error::Transport { url, source: e }
        })
    }

    /// Fetches `<R::ENDPOINT>/<identifier>/` and maps it.
    pub async fn fetch_resource<R: Resource>(&self, identifier: &str) -> Result<R> {
        let identifier = checked_identifier(R::ENDPOINT, identifier)?;
        let document = self.fetch_json(&format!("{}/{}", R::ENDPOINT, identifier)).await?;
        let resource = R::from_json(document)?;
        tracing::debug!("Mapped {}: {}", R::ENDPOINT, identifier);
        Ok(resource)
    }

    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_resource(name).await
    }

    pub async fn get_pokemon_by_id(&self, id: u32) -> Result<Pokemon> {
        self.get_pokemon(&id.to_string()).await
    }

    pub async fn get_move(&self, name: &str) -> Result<Move> {
        self.fetch_resource(name).await
    }

    pub async fn get_move_by_id(&self, id: u32) -> Result<Move> {
        self.get_move(&id.to_string()).await
    }

    pub async fn get_ability(&self, name: &str) -> Result<Ability> {
        self.fetch_resource(name).await
    }

    pub async fn get_ability_by_id(&self, id: u32) -> Result<Ability> {
        self.get_ability(&id.to_string()).await
    }

    pub async fn get_species(&self, name: &str) -> Result<PokemonSpecies> {
        self.fetch_resource(name).await
    }

    pub async fn get_species_by_id(&self, id: u32) -> Result<PokemonSpecies> {
        self.get_species(&id.to_string()).await
    }

    /// The species a fetched Pokémon belongs to.
    pub async fn get_species_of(&self, pokemon: &Pokemon) -> Result<PokemonSpecies> {
        self.get_species(pokemon.species_name()).await
    }

    /// Wild encounters of the Pokémon with this name.
    pub async fn get_encounters(&self, pokemon: &str) -> Result<Vec<Encounter>> {
        let identifier = checked_identifier(Pokemon::ENDPOINT, pokemon)?;
        let document = self.fetch_json(&encounters_path(identifier)).await?;
        let encounters = encounters_from_json(document)?;
        tracing::debug!("Mapped {} encounters for {}", encounters.len(), identifier);
        Ok(encounters)
    }

    pub async fn get_encounters_by_id(&self, id: u32) -> Result<Vec<Encounter>> {
        self.get_encounters(&id.to_string()).await
    }

    /// Fetches the details behind a static identifier such as a version group.
    pub async fn load<L: Loadable>(&self, identifier: L) -> Result<L::Details> {
        self.fetch_resource(identifier.identifier()).await
    }
}

/// Accepts only plain path segments (ASCII letters, digits and `-`), so an
/// identifier can never select a different path, query or fragment.
fn checked_identifier<'a>(endpoint: &str, identifier: &'a str) -> Result<&'a str> {
    let trimmed = identifier.trim();
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if trimmed.is_empty() || !plain {
        tracing::warn!("Rejected {} identifier: {:?}", endpoint, identifier);
        return Err(Error::not_found(format!("{endpoint}/{identifier}")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = Client::new(ClientConfig::with_api_url("http://localhost:1/api/v2/")).unwrap();
        assert_eq!(client.url("pokemon/bulbasaur"), "http://localhost:1/api/v2/pokemon/bulbasaur/");
        assert_eq!(
            client.url(&encounters_path("starly")),
            "http://localhost:1/api/v2/pokemon/starly/encounters/"
        );
    }

    #[test]
    fn test_checked_identifier() {
        assert_eq!(checked_identifier("pokemon", " pikachu ").unwrap(), "pikachu");
        assert!(checked_identifier("pokemon", "").unwrap_err().is_not_found());
        assert!(checked_identifier("pokemon", "   ").unwrap_err().is_not_found());
        assert!(checked_identifier("pokemon", "a/b").unwrap_err().is_not_found());
        assert_eq!(checked_identifier("pokemon", "mr-mime").unwrap(), "mr-mime");
        assert_eq!(checked_identifier("pokemon", "25").unwrap(), "25");
        for rejected in ["bulbasaur?", "bulbasaur#x", "..", ".", "bulba saur", "%2e%2e", "bulbasaur?limit=1"] {
            assert!(
                checked_identifier("pokemon", rejected).unwrap_err().is_not_found(),
                "{rejected:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_identifier_skips_network() {
        // Nothing listens on port 1; reaching the network would be a transport error.
        let client = Client::new(ClientConfig::with_api_url("http://127.0.0.1:1")).unwrap();
        let err = client.get_move("").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
