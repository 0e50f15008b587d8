// blocking.rs
// A blocking facade over `Client` for callers without an async runtime.

use tokio::runtime::{Builder, Runtime};

use crate::ability::Ability;
use crate::client;
use crate::config::ClientConfig;
use crate::encounter::Encounter;
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::pokemon::Pokemon;
use crate::species::PokemonSpecies;
use crate::version::Loadable;

/// Blocks the calling thread until each response is mapped.
///
/// Must not be used from within an async context; the inner runtime panics
/// when driven from another runtime's worker.
#[derive(Debug)]
pub struct Client {
    inner: client::Client,
    runtime: Runtime,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::from_async(client::Client::new(config)?)
    }

    pub fn from_async(inner: client::Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                tracing::error!("Failed to start blocking runtime: {}", e);
                Error::Runtime(e)
            })?;
        Ok(Self { inner, runtime })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    pub fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.runtime.block_on(self.inner.get_pokemon(name))
    }

    pub fn get_pokemon_by_id(&self, id: u32) -> Result<Pokemon> {
        self.runtime.block_on(self.inner.get_pokemon_by_id(id))
    }

    pub fn get_move(&self, name: &str) -> Result<Move> {
        self.runtime.block_on(self.inner.get_move(name))
    }

    pub fn get_move_by_id(&self, id: u32) -> Result<Move> {
        self.runtime.block_on(self.inner.get_move_by_id(id))
    }

    pub fn get_ability(&self, name: &str) -> Result<Ability> {
        self.runtime.block_on(self.inner.get_ability(name))
    }

    pub fn get_ability_by_id(&self, id: u32) -> Result<Ability> {
        self.runtime.block_on(self.inner.get_ability_by_id(id))
    }

    pub fn get_species(&self, name: &str) -> Result<PokemonSpecies> {
        self.runtime.block_on(self.inner.get_species(name))
    }

    pub fn get_species_by_id(&self, id: u32) -> Result<PokemonSpecies> {
        self.runtime.block_on(self.inner.get_species_by_id(id))
    }

    pub fn get_species_of(&self, pokemon: &Pokemon) -> Result<PokemonSpecies> {
        self.runtime.block_on(self.inner.get_species_of(pokemon))
    }

    pub fn get_encounters(&self, pokemon: &str) -> Result<Vec<Encounter>> {
        self.runtime.block_on(self.inner.get_encounters(pokemon))
    }

    pub fn get_encounters_by_id(&self, id: u32) -> Result<Vec<Encounter>> {
        self.runtime.block_on(self.inner.get_encounters_by_id(id))
    }

    pub fn load<L: Loadable>(&self, identifier: L) -> Result<L::Details> {
        self.runtime.block_on(self.inner.load(identifier))
    }
}
