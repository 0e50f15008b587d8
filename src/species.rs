// species.rs
// Species data shared by every form of a Pokémon.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{ApiFlavorText, ApiGenus, ApiName, NamedApiResource, Resource};
use crate::error::Result;
use crate::lang::{FlavorScope, Flavors, LocalizedNames};
use crate::names::api_enum;
use crate::pokedex::Pokedex;
use crate::version::Generation;

api_enum! {
    pub enum EggGroup("egg group") {
        Monster => "monster",
        Water1 => "water1",
        Bug => "bug",
        Flying => "flying",
        Ground => "ground",
        Fairy => "fairy",
        Plant => "plant",
        HumanShape => "humanshape",
        Water3 => "water3",
        Mineral => "mineral",
        Indeterminate => "indeterminate",
        Water2 => "water2",
        Ditto => "ditto",
        Dragon => "dragon",
        NoEggs => "no-eggs",
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiSpecies {
    id: u32,
    name: String,
    order: u32,
    gender_rate: i8,
    capture_rate: u8,
    base_happiness: Option<u8>,
    is_baby: bool,
    is_legendary: bool,
    #[serde(default)]
    is_mythical: bool,
    hatch_counter: Option<u8>,
    has_gender_differences: bool,
    forms_switchable: bool,
    generation: NamedApiResource,
    #[serde(default)]
    egg_groups: Vec<NamedApiResource>,
    #[serde(default)]
    pokedex_numbers: Vec<ApiPokedexNumber>,
    #[serde(default)]
    names: Vec<ApiName>,
    #[serde(default)]
    genera: Vec<ApiGenus>,
    #[serde(default)]
    flavor_text_entries: Vec<ApiFlavorText>,
}

#[derive(Debug, Deserialize)]
struct ApiPokedexNumber {
    entry_number: u32,
    pokedex: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonSpecies {
    id: u32,
    name: String,
    order: u32,
    gender_rate: i8,
    capture_rate: u8,
    base_happiness: Option<u8>,
    baby: bool,
    legendary: bool,
    mythical: bool,
    hatch_counter: Option<u8>,
    gender_differences: bool,
    forms_switchable: bool,
    generation: Generation,
    egg_groups: Vec<EggGroup>,
    pokedex_numbers: BTreeMap<Pokedex, u32>,
    localized_names: LocalizedNames,
    genera: LocalizedNames,
    flavors: Flavors,
}

impl PokemonSpecies {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Chance of being female in eighths, or -1 for genderless species.
    pub fn gender_rate(&self) -> i8 {
        self.gender_rate
    }

    pub fn is_genderless(&self) -> bool {
        self.gender_rate < 0
    }

    pub fn capture_rate(&self) -> u8 {
        self.capture_rate
    }

    pub fn base_happiness(&self) -> Option<u8> {
        self.base_happiness
    }

    pub fn is_baby(&self) -> bool {
        self.baby
    }

    pub fn is_legendary(&self) -> bool {
        self.legendary
    }

    pub fn is_mythical(&self) -> bool {
        self.mythical
    }

    /// Egg cycles to hatch, where one cycle is 255 steps.
    pub fn hatch_counter(&self) -> Option<u8> {
        self.hatch_counter
    }

    pub fn has_gender_differences(&self) -> bool {
        self.gender_differences
    }

    pub fn is_forms_switchable(&self) -> bool {
        self.forms_switchable
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn egg_groups(&self) -> &[EggGroup] {
        &self.egg_groups
    }

    pub fn pokedex_numbers(&self) -> &BTreeMap<Pokedex, u32> {
        &self.pokedex_numbers
    }

    pub fn pokedex_number(&self, pokedex: Pokedex) -> Option<u32> {
        self.pokedex_numbers.get(&pokedex).copied()
    }

    pub fn localized_names(&self) -> &LocalizedNames {
        &self.localized_names
    }

    pub fn genera(&self) -> &LocalizedNames {
        &self.genera
    }

    /// Flavor text keyed by version.
    pub fn flavors(&self) -> &Flavors {
        &self.flavors
    }
}

impl Resource for PokemonSpecies {
    const ENDPOINT: &'static str = "pokemon-species";
    type Api = ApiSpecies;

    fn from_api(api: ApiSpecies) -> Result<Self> {
        Ok(Self {
            id: api.id,
            name: api.name,
            order: api.order,
            gender_rate: api.gender_rate,
            capture_rate: api.capture_rate,
            base_happiness: api.base_happiness,
            baby: api.is_baby,
            legendary: api.is_legendary,
            mythical: api.is_mythical,
            hatch_counter: api.hatch_counter,
            gender_differences: api.has_gender_differences,
            forms_switchable: api.forms_switchable,
            generation: Generation::from_resource(&api.generation)?,
            egg_groups: api
                .egg_groups
                .iter()
                .map(EggGroup::from_resource)
                .collect::<Result<_>>()?,
            pokedex_numbers: api
                .pokedex_numbers
                .iter()
                .map(|number| Ok((Pokedex::from_resource(&number.pokedex)?, number.entry_number)))
                .collect::<Result<_>>()?,
            localized_names: LocalizedNames::from_api(api.names)?,
            genera: LocalizedNames::from_genera(api.genera)?,
            flavors: Flavors::from_api(
                Self::ENDPOINT,
                api.flavor_text_entries,
                FlavorScope::Version,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::lang::Language;
    use crate::version::Version;
    use serde_json::{Value, json};

    fn pikachu_json() -> Value {
        let path = format!("{}/tests/fixtures/pokemon-species-pikachu.json", env!("CARGO_MANIFEST_DIR"));
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_pikachu_species() {
        let species = PokemonSpecies::from_json(pikachu_json()).unwrap();
        assert_eq!(species.id(), 25);
        assert_eq!(species.name(), "pikachu");
        assert_eq!(species.base_happiness(), Some(50));
        assert_eq!(species.capture_rate(), 190);
        assert_eq!(species.order(), 35);
        assert_eq!(species.hatch_counter(), Some(10));
        assert_eq!(species.gender_rate(), 4);
        assert!(!species.is_genderless());
        assert!(!species.is_baby());
        assert!(!species.is_legendary());
        assert!(!species.is_forms_switchable());
        assert!(species.has_gender_differences());
        assert_eq!(species.generation(), Generation::I);
        assert_eq!(species.egg_groups(), &[EggGroup::Ground, EggGroup::Fairy]);
        assert_eq!(species.pokedex_number(Pokedex::UpdatedHoenn), Some(163));
        assert_eq!(species.pokedex_number(Pokedex::National), Some(25));
        assert_eq!(species.pokedex_number(Pokedex::Hisui), None);
        assert_eq!(
            species.localized_names().get(Language::English).unwrap().name(),
            "Pikachu"
        );
        assert_eq!(
            species.genera().get(Language::English).unwrap().name(),
            "Mouse Pokémon"
        );

        let flavor = species.flavors().get(Language::English).unwrap();
        assert!(flavor.text().starts_with("When several"));
        assert_eq!(flavor.version(), Some(Version::Red));
    }

    #[test]
    fn test_gender_rate_is_passed_through() {
        let mut raw = pikachu_json();
        raw["gender_rate"] = json!(9);
        assert_eq!(PokemonSpecies::from_json(raw).unwrap().gender_rate(), 9);

        let mut raw = pikachu_json();
        raw["gender_rate"] = json!(-1);
        assert!(PokemonSpecies::from_json(raw).unwrap().is_genderless());
    }

    #[test]
    fn test_unknown_egg_group() {
        let mut raw = pikachu_json();
        raw["egg_groups"][0]["name"] = json!("undiscovered-land");
        assert!(matches!(
            PokemonSpecies::from_json(raw).unwrap_err(),
            Error::UnknownEnumValue { kind: "egg group", .. }
        ));
    }
}
