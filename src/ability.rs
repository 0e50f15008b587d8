use serde::{Deserialize, Serialize};

use crate::api::{ApiFlavorText, ApiName, NamedApiResource, Resource};
use crate::error::Result;
use crate::lang::{FlavorScope, Flavors, LocalizedNames};
use crate::version::Generation;

#[derive(Debug, Deserialize)]
pub struct ApiAbility {
    id: u32,
    name: String,
    is_main_series: bool,
    generation: NamedApiResource,
    #[serde(default)]
    names: Vec<ApiName>,
    #[serde(default)]
    flavor_text_entries: Vec<ApiFlavorText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ability {
    id: u32,
    name: String,
    main_series: bool,
    generation: Generation,
    localized_names: LocalizedNames,
    flavors: Flavors,
}

impl Ability {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this ability originated in the main series of the video games.
    pub fn is_main_series(&self) -> bool {
        self.main_series
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn localized_names(&self) -> &LocalizedNames {
        &self.localized_names
    }

    pub fn flavors(&self) -> &Flavors {
        &self.flavors
    }
}

impl Resource for Ability {
    const ENDPOINT: &'static str = "ability";
    type Api = ApiAbility;

    fn from_api(api: ApiAbility) -> Result<Self> {
        Ok(Self {
            id: api.id,
            name: api.name,
            main_series: api.is_main_series,
            generation: Generation::from_resource(&api.generation)?,
            localized_names: LocalizedNames::from_api(api.names)?,
            flavors: Flavors::from_api(
                Self::ENDPOINT,
                api.flavor_text_entries,
                FlavorScope::VersionGroup,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Language;
    use crate::version::VersionGroup;

    #[test]
    fn test_levitate() {
        let path = format!("{}/tests/fixtures/ability-levitate.json", env!("CARGO_MANIFEST_DIR"));
        let raw = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let levitate = Ability::from_json(raw).unwrap();

        assert_eq!(levitate.id(), 26);
        assert_eq!(levitate.name(), "levitate");
        assert!(levitate.is_main_series());
        assert_eq!(levitate.generation(), Generation::III);
        assert!(!levitate.localized_names().is_empty());
        assert_eq!(
            levitate.localized_names().get(Language::English).unwrap().name(),
            "Levitate"
        );
        let flavor = levitate.flavors().get(Language::English).unwrap();
        assert_eq!(flavor.version_group(), Some(VersionGroup::RubySapphire));
        assert!(flavor.text().contains("Ground"));
    }
}
