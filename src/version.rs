// version.rs
// Game versions, version groups and generations. The enumerations are static;
// their details are fetched on demand through `Client::load`.

use serde::{Deserialize, Serialize};

use crate::api::{ApiName, NamedApiResource, Resource};
use crate::error::Result;
use crate::lang::LocalizedNames;
use crate::moves::MoveLearnMethod;
use crate::names::api_enum;
use crate::pokedex::Pokedex;
use crate::types::PokemonType;

/// A static identifier whose details live behind their own endpoint.
pub trait Loadable: Copy {
    type Details: Resource;

    fn identifier(self) -> &'static str;
}

api_enum! {
    pub enum Version("version") {
        Red => "red",
        Blue => "blue",
        Yellow => "yellow",
        Gold => "gold",
        Silver => "silver",
        Crystal => "crystal",
        Ruby => "ruby",
        Sapphire => "sapphire",
        Emerald => "emerald",
        FireRed => "firered",
        LeafGreen => "leafgreen",
        Diamond => "diamond",
        Pearl => "pearl",
        Platinum => "platinum",
        HeartGold => "heartgold",
        SoulSilver => "soulsilver",
        Black => "black",
        White => "white",
        Colosseum => "colosseum",
        Xd => "xd",
        Black2 => "black-2",
        White2 => "white-2",
        X => "x",
        Y => "y",
        OmegaRuby => "omega-ruby",
        AlphaSapphire => "alpha-sapphire",
        Sun => "sun",
        Moon => "moon",
        UltraSun => "ultra-sun",
        UltraMoon => "ultra-moon",
        LetsGoPikachu => "lets-go-pikachu",
        LetsGoEevee => "lets-go-eevee",
        Sword => "sword",
        Shield => "shield",
        TheIsleOfArmor => "the-isle-of-armor",
        TheCrownTundra => "the-crown-tundra",
        BrilliantDiamond => "brilliant-diamond",
        ShiningPearl => "shining-pearl",
        LegendsArceus => "legends-arceus",
        Scarlet => "scarlet",
        Violet => "violet",
        TheTealMask => "the-teal-mask",
        TheIndigoDisk => "the-indigo-disk",
        RedJapan => "red-japan",
        GreenJapan => "green-japan",
        BlueJapan => "blue-japan",
        LegendsZa => "legends-za",
    }
}

api_enum! {
    pub enum VersionGroup("version group") {
        RedBlue => "red-blue",
        Yellow => "yellow",
        GoldSilver => "gold-silver",
        Crystal => "crystal",
        RubySapphire => "ruby-sapphire",
        Emerald => "emerald",
        FireRedLeafGreen => "firered-leafgreen",
        DiamondPearl => "diamond-pearl",
        Platinum => "platinum",
        HeartGoldSoulSilver => "heartgold-soulsilver",
        BlackWhite => "black-white",
        Colosseum => "colosseum",
        Xd => "xd",
        Black2White2 => "black-2-white-2",
        XY => "x-y",
        OmegaRubyAlphaSapphire => "omega-ruby-alpha-sapphire",
        SunMoon => "sun-moon",
        UltraSunUltraMoon => "ultra-sun-ultra-moon",
        LetsGoPikachuLetsGoEevee => "lets-go-pikachu-lets-go-eevee",
        SwordShield => "sword-shield",
        TheIsleOfArmor => "the-isle-of-armor",
        TheCrownTundra => "the-crown-tundra",
        BrilliantDiamondAndShiningPearl => "brilliant-diamond-and-shining-pearl",
        LegendsArceus => "legends-arceus",
        ScarletViolet => "scarlet-violet",
        TheTealMask => "the-teal-mask",
        TheIndigoDisk => "the-indigo-disk",
        RedGreenJapan => "red-green-japan",
        BlueJapan => "blue-japan",
        LegendsZa => "legends-za",
    }
}

api_enum! {
    pub enum Generation("generation") {
        I => "generation-i",
        II => "generation-ii",
        III => "generation-iii",
        IV => "generation-iv",
        V => "generation-v",
        VI => "generation-vi",
        VII => "generation-vii",
        VIII => "generation-viii",
        IX => "generation-ix",
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiVersion {
    id: u32,
    name: String,
    names: Vec<ApiName>,
    version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionDetails {
    id: u32,
    version: Version,
    group: VersionGroup,
    localized_names: LocalizedNames,
}

impl VersionDetails {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn group(&self) -> VersionGroup {
        self.group
    }

    pub fn localized_names(&self) -> &LocalizedNames {
        &self.localized_names
    }
}

impl Resource for VersionDetails {
    const ENDPOINT: &'static str = "version";
    type Api = ApiVersion;

    fn from_api(api: ApiVersion) -> Result<Self> {
        Ok(Self {
            id: api.id,
            version: Version::from_api_name(&api.name)?,
            group: VersionGroup::from_resource(&api.version_group)?,
            localized_names: LocalizedNames::from_api(api.names)?,
        })
    }
}

impl Loadable for Version {
    type Details = VersionDetails;

    fn identifier(self) -> &'static str {
        self.api_name()
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiVersionGroup {
    id: u32,
    name: String,
    order: u32,
    generation: NamedApiResource,
    #[serde(default)]
    move_learn_methods: Vec<NamedApiResource>,
    #[serde(default)]
    pokedexes: Vec<NamedApiResource>,
    #[serde(default)]
    regions: Vec<NamedApiResource>,
    versions: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionGroupDetails {
    id: u32,
    group: VersionGroup,
    order: u32,
    generation: Generation,
    versions: Vec<Version>,
    move_learn_methods: Vec<MoveLearnMethod>,
    pokedexes: Vec<Pokedex>,
    regions: Vec<String>,
}

impl VersionGroupDetails {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn group(&self) -> VersionGroup {
        self.group
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn move_learn_methods(&self) -> &[MoveLearnMethod] {
        &self.move_learn_methods
    }

    pub fn pokedexes(&self) -> &[Pokedex] {
        &self.pokedexes
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

impl Resource for VersionGroupDetails {
    const ENDPOINT: &'static str = "version-group";
    type Api = ApiVersionGroup;

    fn from_api(api: ApiVersionGroup) -> Result<Self> {
        Ok(Self {
            id: api.id,
            group: VersionGroup::from_api_name(&api.name)?,
            order: api.order,
            generation: Generation::from_resource(&api.generation)?,
            versions: api
                .versions
                .iter()
                .map(Version::from_resource)
                .collect::<Result<_>>()?,
            move_learn_methods: api
                .move_learn_methods
                .iter()
                .map(MoveLearnMethod::from_resource)
                .collect::<Result<_>>()?,
            pokedexes: api
                .pokedexes
                .iter()
                .map(Pokedex::from_resource)
                .collect::<Result<_>>()?,
            regions: api.regions.into_iter().map(|region| region.name).collect(),
        })
    }
}

impl Loadable for VersionGroup {
    type Details = VersionGroupDetails;

    fn identifier(self) -> &'static str {
        self.api_name()
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiGeneration {
    id: u32,
    name: String,
    main_region: NamedApiResource,
    #[serde(default)]
    abilities: Vec<NamedApiResource>,
    #[serde(default)]
    moves: Vec<NamedApiResource>,
    #[serde(default)]
    pokemon_species: Vec<NamedApiResource>,
    #[serde(default)]
    types: Vec<NamedApiResource>,
    #[serde(default)]
    version_groups: Vec<NamedApiResource>,
    names: Vec<ApiName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationDetails {
    id: u32,
    generation: Generation,
    main_region: String,
    types: Vec<PokemonType>,
    groups: Vec<VersionGroup>,
    ability_names: Vec<String>,
    move_names: Vec<String>,
    species_names: Vec<String>,
    localized_names: LocalizedNames,
}

impl GenerationDetails {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn main_region(&self) -> &str {
        &self.main_region
    }

    /// Types introduced in this generation.
    pub fn types(&self) -> &[PokemonType] {
        &self.types
    }

    pub fn groups(&self) -> &[VersionGroup] {
        &self.groups
    }

    pub fn ability_names(&self) -> &[String] {
        &self.ability_names
    }

    pub fn move_names(&self) -> &[String] {
        &self.move_names
    }

    pub fn species_names(&self) -> &[String] {
        &self.species_names
    }

    pub fn localized_names(&self) -> &LocalizedNames {
        &self.localized_names
    }
}

fn names_of(resources: Vec<NamedApiResource>) -> Vec<String> {
    resources.into_iter().map(|resource| resource.name).collect()
}

impl Resource for GenerationDetails {
    const ENDPOINT: &'static str = "generation";
    type Api = ApiGeneration;

    fn from_api(api: ApiGeneration) -> Result<Self> {
        Ok(Self {
            id: api.id,
            generation: Generation::from_api_name(&api.name)?,
            main_region: api.main_region.name,
            types: api
                .types
                .iter()
                .map(PokemonType::from_resource)
                .collect::<Result<_>>()?,
            groups: api
                .version_groups
                .iter()
                .map(VersionGroup::from_resource)
                .collect::<Result<_>>()?,
            ability_names: names_of(api.abilities),
            move_names: names_of(api.moves),
            species_names: names_of(api.pokemon_species),
            localized_names: LocalizedNames::from_api(api.names)?,
        })
    }
}

impl Loadable for Generation {
    type Details = GenerationDetails;

    fn identifier(self) -> &'static str {
        self.api_name()
    }
}
