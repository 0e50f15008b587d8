// pokedex.rs
// Regional and national Pokédexes.

use serde::{Deserialize, Serialize};

use crate::api::{ApiDescription, ApiName, NamedApiResource, Resource};
use crate::error::Result;
use crate::lang::LocalizedNames;
use crate::names::api_enum;
use crate::version::{Loadable, VersionGroup};

api_enum! {
    pub enum Pokedex("pokedex") {
        National => "national",
        Kanto => "kanto",
        OriginalJohto => "original-johto",
        Hoenn => "hoenn",
        OriginalSinnoh => "original-sinnoh",
        ExtendedSinnoh => "extended-sinnoh",
        UpdatedJohto => "updated-johto",
        OriginalUnova => "original-unova",
        UpdatedUnova => "updated-unova",
        ConquestGallery => "conquest-gallery",
        KalosCentral => "kalos-central",
        KalosCoastal => "kalos-coastal",
        KalosMountain => "kalos-mountain",
        UpdatedHoenn => "updated-hoenn",
        OriginalAlola => "original-alola",
        OriginalMelemele => "original-melemele",
        OriginalAkala => "original-akala",
        OriginalUlaula => "original-ulaula",
        OriginalPoni => "original-poni",
        UpdatedAlola => "updated-alola",
        UpdatedMelemele => "updated-melemele",
        UpdatedAkala => "updated-akala",
        UpdatedUlaula => "updated-ulaula",
        UpdatedPoni => "updated-poni",
        LetsGoKanto => "letsgo-kanto",
        Galar => "galar",
        IsleOfArmor => "isle-of-armor",
        CrownTundra => "crown-tundra",
        Hisui => "hisui",
        Paldea => "paldea",
        Kitakami => "kitakami",
        Blueberry => "blueberry",
        LumioseCity => "lumiose-city",
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiPokedex {
    id: u32,
    name: String,
    is_main_series: bool,
    #[serde(default)]
    descriptions: Vec<ApiDescription>,
    names: Vec<ApiName>,
    pokemon_entries: Vec<ApiPokemonEntry>,
    region: Option<NamedApiResource>,
    #[serde(default)]
    version_groups: Vec<NamedApiResource>,
}

#[derive(Debug, Deserialize)]
struct ApiPokemonEntry {
    entry_number: u32,
    pokemon_species: NamedApiResource,
}

/// A species listed in a Pokédex under its regional number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokedexEntry {
    number: u32,
    species: String,
}

impl PokedexEntry {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokedexDetails {
    id: u32,
    pokedex: Pokedex,
    main_series: bool,
    region: Option<String>,
    descriptions: LocalizedNames,
    localized_names: LocalizedNames,
    entries: Vec<PokedexEntry>,
    groups: Vec<VersionGroup>,
}

impl PokedexDetails {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn pokedex(&self) -> Pokedex {
        self.pokedex
    }

    pub fn is_main_series(&self) -> bool {
        self.main_series
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn descriptions(&self) -> &LocalizedNames {
        &self.descriptions
    }

    pub fn localized_names(&self) -> &LocalizedNames {
        &self.localized_names
    }

    pub fn entries(&self) -> &[PokedexEntry] {
        &self.entries
    }

    pub fn groups(&self) -> &[VersionGroup] {
        &self.groups
    }

    pub fn entry(&self, species: &str) -> Option<&PokedexEntry> {
        self.entries.iter().find(|entry| entry.species == species)
    }
}

impl Resource for PokedexDetails {
    const ENDPOINT: &'static str = "pokedex";
    type Api = ApiPokedex;

    fn from_api(api: ApiPokedex) -> Result<Self> {
        Ok(Self {
            id: api.id,
            pokedex: Pokedex::from_api_name(&api.name)?,
            main_series: api.is_main_series,
            region: api.region.map(|region| region.name),
            descriptions: LocalizedNames::from_descriptions(api.descriptions)?,
            localized_names: LocalizedNames::from_api(api.names)?,
            entries: api
                .pokemon_entries
                .into_iter()
                .map(|entry| PokedexEntry {
                    number: entry.entry_number,
                    species: entry.pokemon_species.name,
                })
                .collect(),
            groups: api
                .version_groups
                .iter()
                .map(VersionGroup::from_resource)
                .collect::<Result<_>>()?,
        })
    }
}

impl Loadable for Pokedex {
    type Details = PokedexDetails;

    fn identifier(self) -> &'static str {
        self.api_name()
    }
}
