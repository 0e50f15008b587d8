// moves.rs
// Moves and the enumerations describing how they behave and how they are learnt.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{ApiFlavorText, ApiName, ApiResource, NamedApiResource, Resource};
use crate::error::{Error, Result};
use crate::lang::{FlavorScope, Flavors, LocalizedNames};
use crate::names::api_enum;
use crate::stat::BattleStat;
use crate::types::PokemonType;
use crate::version::{Generation, VersionGroup};

api_enum! {
    pub enum MoveLearnMethod("move learn method") {
        LevelUp => "level-up",
        Egg => "egg",
        Tutor => "tutor",
        Machine => "machine",
        StadiumSurfingPikachu => "stadium-surfing-pikachu",
        LightBallEgg => "light-ball-egg",
        ColosseumPurification => "colosseum-purification",
        XdShadow => "xd-shadow",
        XdPurification => "xd-purification",
        FormChange => "form-change",
        ZygardeCube => "zygarde-cube",
    }
}

api_enum! {
    pub enum MoveAilment("move ailment") {
        Unknown => "unknown",
        None => "none",
        Paralysis => "paralysis",
        Sleep => "sleep",
        Freeze => "freeze",
        Burn => "burn",
        Poison => "poison",
        Confusion => "confusion",
        Infatuation => "infatuation",
        Trap => "trap",
        Nightmare => "nightmare",
        Torment => "torment",
        Disable => "disable",
        Yawn => "yawn",
        HealBlock => "heal-block",
        NoTypeImmunity => "no-type-immunity",
        LeechSeed => "leech-seed",
        Embargo => "embargo",
        PerishSong => "perish-song",
        Ingrain => "ingrain",
        Silence => "silence",
        TarShot => "tar-shot",
    }
}

api_enum! {
    pub enum MoveCategory("move category") {
        Damage => "damage",
        Ailment => "ailment",
        NetGoodStats => "net-good-stats",
        Heal => "heal",
        DamageAndAilment => "damage+ailment",
        Swagger => "swagger",
        DamageAndLower => "damage+lower",
        DamageAndRaise => "damage+raise",
        DamageAndHeal => "damage+heal",
        Ohko => "ohko",
        WholeFieldEffect => "whole-field-effect",
        FieldEffect => "field-effect",
        ForceSwitch => "force-switch",
        Unique => "unique",
    }
}

api_enum! {
    pub enum MoveDamageClass("move damage class") {
        Status => "status",
        Physical => "physical",
        Special => "special",
    }
}

api_enum! {
    pub enum MoveTarget("move target") {
        SpecificMove => "specific-move",
        SelectedPokemonMeFirst => "selected-pokemon-me-first",
        Ally => "ally",
        UsersField => "users-field",
        UserOrAlly => "user-or-ally",
        OpponentsField => "opponents-field",
        User => "user",
        RandomOpponent => "random-opponent",
        AllOtherPokemon => "all-other-pokemon",
        SelectedPokemon => "selected-pokemon",
        AllOpponents => "all-opponents",
        EntireField => "entire-field",
        UserAndAllies => "user-and-allies",
        AllPokemon => "all-pokemon",
        AllAllies => "all-allies",
        FaintingPokemon => "fainting-pokemon",
    }
}

pub const MIN_PRIORITY: i8 = -8;
pub const MAX_PRIORITY: i8 = 8;

#[derive(Debug, Deserialize)]
pub struct ApiMove {
    id: u32,
    name: String,
    accuracy: Option<u8>,
    effect_chance: Option<u8>,
    pp: Option<u8>,
    priority: i8,
    power: Option<u32>,
    #[serde(rename = "type")]
    ty: NamedApiResource,
    damage_class: Option<NamedApiResource>,
    target: NamedApiResource,
    generation: NamedApiResource,
    meta: Option<ApiMoveMeta>,
    #[serde(default)]
    machines: Vec<ApiMachineVersionDetail>,
    #[serde(default)]
    stat_changes: Vec<ApiStatChange>,
    #[serde(default)]
    names: Vec<ApiName>,
    #[serde(default)]
    flavor_text_entries: Vec<ApiFlavorText>,
}

#[derive(Debug, Deserialize)]
struct ApiMoveMeta {
    ailment: NamedApiResource,
    category: NamedApiResource,
    #[serde(default)]
    ailment_chance: u8,
    #[serde(default)]
    drain: i32,
    #[serde(default)]
    healing: i32,
    #[serde(default)]
    crit_rate: u8,
    #[serde(default)]
    flinch_chance: u8,
    #[serde(default)]
    stat_chance: u8,
}

#[derive(Debug, Deserialize)]
struct ApiMachineVersionDetail {
    machine: ApiResource,
    version_group: NamedApiResource,
}

#[derive(Debug, Deserialize)]
struct ApiStatChange {
    change: i8,
    stat: NamedApiResource,
}

/// Secondary battle data. The API omits it for some moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveMeta {
    ailment: MoveAilment,
    ailment_chance: u8,
    category: MoveCategory,
    drain: i32,
    healing: i32,
    crit_rate: u8,
    flinch_chance: u8,
    stat_chance: u8,
}

impl MoveMeta {
    pub fn ailment(&self) -> MoveAilment {
        self.ailment
    }

    pub fn ailment_chance(&self) -> u8 {
        self.ailment_chance
    }

    pub fn category(&self) -> MoveCategory {
        self.category
    }

    /// HP drain (positive) or recoil (negative) as a percentage of damage dealt.
    pub fn drain(&self) -> i32 {
        self.drain
    }

    /// HP restored as a percentage of the user's maximum HP.
    pub fn healing(&self) -> i32 {
        self.healing
    }

    pub fn crit_rate(&self) -> u8 {
        self.crit_rate
    }

    pub fn flinch_chance(&self) -> u8 {
        self.flinch_chance
    }

    pub fn stat_chance(&self) -> u8 {
        self.stat_chance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatChange {
    stat: BattleStat,
    change: i8,
}

impl StatChange {
    pub fn stat(&self) -> BattleStat {
        self.stat
    }

    pub fn change(&self) -> i8 {
        self.change
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    id: u32,
    name: String,
    accuracy: Option<u8>,
    effect_chance: Option<u8>,
    power_points: Option<u8>,
    priority: i8,
    power: Option<u32>,
    ty: PokemonType,
    damage_class: Option<MoveDamageClass>,
    target: MoveTarget,
    generation: Generation,
    meta: Option<MoveMeta>,
    machines: BTreeMap<VersionGroup, u32>,
    stat_changes: Vec<StatChange>,
    localized_names: LocalizedNames,
    flavors: Flavors,
}

impl Move {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Percent chance to hit. `None` for moves that never miss.
    pub fn accuracy(&self) -> Option<u8> {
        self.accuracy
    }

    pub fn effect_chance(&self) -> Option<u8> {
        self.effect_chance
    }

    pub fn power_points(&self) -> Option<u8> {
        self.power_points
    }

    /// Between -8 and 8.
    pub fn priority(&self) -> i8 {
        self.priority
    }

    pub fn power(&self) -> Option<u32> {
        self.power
    }

    pub fn ty(&self) -> PokemonType {
        self.ty
    }

    pub fn damage_class(&self) -> Option<MoveDamageClass> {
        self.damage_class
    }

    pub fn target(&self) -> MoveTarget {
        self.target
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn meta(&self) -> Option<&MoveMeta> {
        self.meta.as_ref()
    }

    pub fn ailment(&self) -> Option<MoveAilment> {
        self.meta.map(|meta| meta.ailment)
    }

    pub fn ailment_chance(&self) -> Option<u8> {
        self.meta.map(|meta| meta.ailment_chance)
    }

    pub fn category(&self) -> Option<MoveCategory> {
        self.meta.map(|meta| meta.category)
    }

    /// Machine number per version group.
    pub fn machines(&self) -> &BTreeMap<VersionGroup, u32> {
        &self.machines
    }

    pub fn machine(&self, group: VersionGroup) -> Option<u32> {
        self.machines.get(&group).copied()
    }

    pub fn stat_changes(&self) -> &[StatChange] {
        &self.stat_changes
    }

    pub fn localized_names(&self) -> &LocalizedNames {
        &self.localized_names
    }

    /// Flavor text keyed by version group.
    pub fn flavors(&self) -> &Flavors {
        &self.flavors
    }
}

impl Resource for Move {
    const ENDPOINT: &'static str = "move";
    type Api = ApiMove;

    fn from_api(api: ApiMove) -> Result<Self> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&api.priority) {
            return Err(Error::malformed(
                Self::ENDPOINT,
                format!("priority {} out of range", api.priority),
            ));
        }

        let meta = api
            .meta
            .map(|meta| {
                Ok::<_, Error>(MoveMeta {
                    ailment: MoveAilment::from_resource(&meta.ailment)?,
                    ailment_chance: meta.ailment_chance,
                    category: MoveCategory::from_resource(&meta.category)?,
                    drain: meta.drain,
                    healing: meta.healing,
                    crit_rate: meta.crit_rate,
                    flinch_chance: meta.flinch_chance,
                    stat_chance: meta.stat_chance,
                })
            })
            .transpose()?;

        let mut machines = BTreeMap::new();
        for detail in &api.machines {
            machines.insert(
                VersionGroup::from_resource(&detail.version_group)?,
                detail.machine.id(Self::ENDPOINT)?,
            );
        }

        let stat_changes = api
            .stat_changes
            .iter()
            .map(|change| {
                Ok(StatChange {
                    stat: BattleStat::from_resource(&change.stat)?,
                    change: change.change,
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            id: api.id,
            name: api.name,
            accuracy: api.accuracy,
            effect_chance: api.effect_chance,
            power_points: api.pp,
            priority: api.priority,
            power: api.power,
            ty: PokemonType::from_resource(&api.ty)?,
            damage_class: api
                .damage_class
                .as_ref()
                .map(MoveDamageClass::from_resource)
                .transpose()?,
            target: MoveTarget::from_resource(&api.target)?,
            generation: Generation::from_resource(&api.generation)?,
            meta,
            machines,
            stat_changes,
            localized_names: LocalizedNames::from_api(api.names)?,
            flavors: Flavors::from_api(
                Self::ENDPOINT,
                api.flavor_text_entries,
                FlavorScope::VersionGroup,
            )?,
        })
    }
}
