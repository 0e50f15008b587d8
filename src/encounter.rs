// encounter.rs
// Where a Pokémon can be found in the wild, per version.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{NamedApiResource, decode};
use crate::error::Result;
use crate::names::api_enum;
use crate::version::Version;

api_enum! {
    pub enum EncounterMethod("encounter method") {
        Walk => "walk",
        OldRod => "old-rod",
        GoodRod => "good-rod",
        SuperRod => "super-rod",
        Surf => "surf",
        RockSmash => "rock-smash",
        Headbutt => "headbutt",
        DarkGrass => "dark-grass",
        GrassSpots => "grass-spots",
        CaveSpots => "cave-spots",
        BridgeSpots => "bridge-spots",
        SuperRodSpots => "super-rod-spots",
        SurfSpots => "surf-spots",
        YellowFlowers => "yellow-flowers",
        PurpleFlowers => "purple-flowers",
        RedFlowers => "red-flowers",
        RoughTerrain => "rough-terrain",
        Gift => "gift",
        GiftEgg => "gift-egg",
        OnlyOne => "only-one",
        PokeFlute => "pokeflute",
        HeadbuttLow => "headbutt-low",
        HeadbuttNormal => "headbutt-normal",
        HeadbuttHigh => "headbutt-high",
        SquirtBottle => "squirt-bottle",
        WailmerPail => "wailmer-pail",
        Seaweed => "seaweed",
        RoamingGrass => "roaming-grass",
        RoamingWater => "roaming-water",
        DevonScope => "devon-scope",
        IslandScan => "island-scan",
        SosEncounter => "sos-encounter",
        BubblingSpots => "bubbling-spots",
        BerryPiles => "berry-piles",
        NpcTrade => "npc-trade",
        SosFromBubblingSpot => "sos-from-bubbling-spot",
        RoamingOverworld => "roaming-overworld",
        Overworld => "overworld",
        OverworldWater => "overworld-water",
        OverworldFlying => "overworld-flying",
        FishingRod => "fishing-rod",
        Wanderer => "wanderer",
        RaidBattle => "raid-battle",
        MaxRaid => "max-raid",
        Tera => "tera",
    }
}

api_enum! {
    pub enum EncounterConditionValue("encounter condition value") {
        SwarmYes => "swarm-yes",
        SwarmNo => "swarm-no",
        TimeMorning => "time-morning",
        TimeDay => "time-day",
        TimeNight => "time-night",
        RadarOn => "radar-on",
        RadarOff => "radar-off",
        Slot2None => "slot2-none",
        Slot2Ruby => "slot2-ruby",
        Slot2Sapphire => "slot2-sapphire",
        Slot2Emerald => "slot2-emerald",
        Slot2FireRed => "slot2-firered",
        Slot2LeafGreen => "slot2-leafgreen",
        RadioOff => "radio-off",
        RadioHoenn => "radio-hoenn",
        RadioSinnoh => "radio-sinnoh",
        SeasonSpring => "season-spring",
        SeasonSummer => "season-summer",
        SeasonAutumn => "season-autumn",
        SeasonWinter => "season-winter",
        StarterBulbasaur => "starter-bulbasaur",
        StarterSquirtle => "starter-squirtle",
        StarterCharmander => "starter-charmander",
        StarterChespin => "starter-chespin",
        StarterFennekin => "starter-fennekin",
        StarterFroakie => "starter-froakie",
        TvOptionBlue => "tv-option-blue",
        TvOptionRed => "tv-option-red",
        StoryProgressAwakenedBeasts => "story-progress-awakened-beasts",
        StoryProgressBeatGalacticCoastal => "story-progress-beat-galactic-coastal",
        StoryProgressOakEternaCity => "story-progress-oak-eterna-city",
        StoryProgressVermilionCopycat => "story-progress-vermilion-copycat",
        StoryProgressMetTornadusThundurus => "story-progress-met-tornadus-thundurus",
        StoryProgressNone => "story-progress-none",
        StoryProgressBeatElite4Round2 => "story-progress-beat-elite-4-round-2",
        StoryProgressBeatElite4 => "story-progress-beat-elite-4",
        StoryProgressHallOfFame => "story-progress-hall-of-fame",
        StoryProgressNationalDex => "story-progress-national-dex",
        StoryProgressBeatRed => "story-progress-beat-red",
        StoryProgressBurnedTowerDone => "story-progress-burned-tower-done",
        StoryProgressRocketInGoldenrod => "story-progress-rocket-in-goldenrod",
        StoryProgressSawKyogreGroudon => "story-progress-saw-kyogre-groudon",
        StoryProgressSafariTwo => "story-progress-safari-two",
        ItemNone => "item-none",
        ItemDragonScale => "item-dragon-scale",
        ItemDragonFang => "item-dragon-fang",
        ItemBlackFlute => "item-black-flute",
        ItemWhiteFlute => "item-white-flute",
        ItemPokeFlute => "item-poke-flute",
        WeatherClearSkies => "weather-clear-skies",
        WeatherCloudy => "weather-cloudy",
        WeatherRain => "weather-rain",
        WeatherThunderstorm => "weather-thunderstorm",
        WeatherSnow => "weather-snow",
        WeatherBlizzard => "weather-blizzard",
        WeatherHarshSunlight => "weather-harsh-sunlight",
        WeatherSandstorm => "weather-sandstorm",
        WeatherFog => "weather-fog",
        GenderMale => "gender-male",
        GenderFemale => "gender-female",
        TimeEvening => "time-evening",
        TimeDusk => "time-dusk",
    }
}

#[derive(Debug, Deserialize)]
struct ApiLocationAreaEncounter {
    location_area: NamedApiResource,
    version_details: Vec<ApiVersionEncounterDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiVersionEncounterDetail {
    max_chance: u32,
    version: NamedApiResource,
    encounter_details: Vec<ApiEncounterDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiEncounterDetail {
    chance: u32,
    #[serde(default)]
    condition_values: Vec<NamedApiResource>,
    max_level: u32,
    min_level: u32,
    method: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncounterDetail {
    chance: u32,
    min_level: u32,
    max_level: u32,
    method: EncounterMethod,
    condition_values: Vec<EncounterConditionValue>,
}

impl EncounterDetail {
    /// Percent chance that this encounter occurs.
    pub fn chance(&self) -> u32 {
        self.chance
    }

    pub fn min_level(&self) -> u32 {
        self.min_level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn method(&self) -> EncounterMethod {
        self.method
    }

    pub fn condition_values(&self) -> &[EncounterConditionValue] {
        &self.condition_values
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionDetail {
    version: Version,
    max_chance: u32,
    encounter_details: Vec<EncounterDetail>,
}

impl VersionDetail {
    pub fn version(&self) -> Version {
        self.version
    }

    /// Total percent of all encounter potential.
    pub fn max_chance(&self) -> u32 {
        self.max_chance
    }

    pub fn encounter_details(&self) -> &[EncounterDetail] {
        &self.encounter_details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encounter {
    location_area: String,
    details: Vec<VersionDetail>,
}

impl Encounter {
    pub fn location_area(&self) -> &str {
        &self.location_area
    }

    pub fn details(&self) -> &[VersionDetail] {
        &self.details
    }

    pub fn detail(&self, version: Version) -> Option<&VersionDetail> {
        self.details.iter().find(|detail| detail.version == version)
    }
}

pub const ENCOUNTERS_KIND: &str = "encounters";

pub(crate) fn encounters_path(identifier: &str) -> String {
    format!("pokemon/{identifier}/encounters")
}

/// Maps the array served at `pokemon/<name-or-id>/encounters`.
pub fn encounters_from_json(document: Value) -> Result<Vec<Encounter>> {
    let raw: Vec<ApiLocationAreaEncounter> = decode(ENCOUNTERS_KIND, document)?;
    raw.into_iter()
        .map(|area| {
            let details = area
                .version_details
                .into_iter()
                .map(|version_detail| {
                    let encounter_details = version_detail
                        .encounter_details
                        .into_iter()
                        .map(|detail| {
                            Ok(EncounterDetail {
                                chance: detail.chance,
                                min_level: detail.min_level,
                                max_level: detail.max_level,
                                method: EncounterMethod::from_resource(&detail.method)?,
                                condition_values: detail
                                    .condition_values
                                    .iter()
                                    .map(EncounterConditionValue::from_resource)
                                    .collect::<Result<_>>()?,
                            })
                        })
                        .collect::<Result<_>>()?;
                    Ok(VersionDetail {
                        version: Version::from_resource(&version_detail.version)?,
                        max_chance: version_detail.max_chance,
                        encounter_details,
                    })
                })
                .collect::<Result<_>>()?;
            Ok(Encounter {
                location_area: area.location_area.name,
                details,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn starly_json() -> Value {
        let path = format!("{}/tests/fixtures/pokemon-starly-encounters.json", env!("CARGO_MANIFEST_DIR"));
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_starly_encounters() {
        let encounters = encounters_from_json(starly_json()).unwrap();
        let great_marsh = encounters
            .iter()
            .find(|encounter| encounter.location_area() == "great-marsh-area-1")
            .unwrap();

        let version_detail = &great_marsh.details()[0];
        assert_eq!(version_detail.max_chance(), 20);
        assert_eq!(version_detail.version(), Version::Diamond);
        assert!(great_marsh.detail(Version::Platinum).is_some());
        assert!(great_marsh.detail(Version::Red).is_none());

        let detail = &version_detail.encounter_details()[0];
        assert_eq!(detail.chance(), 10);
        assert_eq!(detail.min_level(), 26);
        assert_eq!(detail.max_level(), 26);
        assert_eq!(detail.method(), EncounterMethod::Walk);
        assert_eq!(detail.condition_values(), &[EncounterConditionValue::TimeMorning]);
    }

    #[test]
    fn test_no_encounters() {
        assert!(encounters_from_json(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_object_instead_of_array() {
        let err = encounters_from_json(json!({ "detail": "Not found." })).unwrap_err();
        assert!(matches!(err, Error::MalformedResource { kind: "encounters", .. }));
    }

    #[test]
    fn test_unknown_method() {
        let mut raw = starly_json();
        raw[0]["version_details"][0]["encounter_details"][0]["method"]["name"] = json!("teleport");
        assert!(matches!(
            encounters_from_json(raw).unwrap_err(),
            Error::UnknownEnumValue { kind: "encounter method", .. }
        ));
    }
}
