// pokemon.rs
// This file contains the Pokémon resource and the pieces it is built from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::{NamedApiResource, Resource};
use crate::error::{Error, Result};
use crate::moves::MoveLearnMethod;
use crate::sprite::{SPRITE_COUNT, Sprite, SpriteKind, sprites_from_api};
use crate::stat::{ApiStat, STAT_COUNT, Stat, StatKind, stats_from_api};
use crate::types::{PokemonType, TypePair};
use crate::version::{Version, VersionGroup};

#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    id: u32,
    name: String,
    base_experience: Option<u32>,
    height: u32,
    #[serde(default)]
    is_default: bool,
    order: i32,
    weight: u32,
    #[serde(default)]
    abilities: Vec<ApiPokemonAbility>,
    #[serde(default)]
    game_indices: Vec<ApiGameIndex>,
    #[serde(default)]
    held_items: Vec<ApiHeldItem>,
    #[serde(default)]
    moves: Vec<ApiPokemonMove>,
    species: NamedApiResource,
    sprites: Map<String, Value>,
    stats: Vec<ApiStat>,
    types: Vec<ApiPokemonType>,
}

#[derive(Debug, Deserialize)]
struct ApiPokemonAbility {
    is_hidden: bool,
    slot: u8,
    ability: NamedApiResource,
}

#[derive(Debug, Deserialize)]
struct ApiGameIndex {
    game_index: u32,
    version: NamedApiResource,
}

#[derive(Debug, Deserialize)]
struct ApiHeldItem {
    item: NamedApiResource,
    #[serde(default)]
    version_details: Vec<ApiHeldItemVersion>,
}

#[derive(Debug, Deserialize)]
struct ApiHeldItemVersion {
    rarity: u32,
    version: NamedApiResource,
}

#[derive(Debug, Deserialize)]
struct ApiPokemonMove {
    r#move: NamedApiResource,
    version_group_details: Vec<ApiMoveVersionGroupDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiMoveVersionGroupDetail {
    level_learned_at: u32,
    move_learn_method: NamedApiResource,
    version_group: NamedApiResource,
}

#[derive(Debug, Deserialize)]
struct ApiPokemonType {
    slot: u8,
    r#type: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonAbility {
    name: String,
    slot: u8,
    hidden: bool,
}

impl PokemonAbility {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// An item a wild Pokémon may be holding, with its rarity per version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemHold {
    item: String,
    rarities: BTreeMap<Version, u32>,
}

impl ItemHold {
    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn rarities(&self) -> &BTreeMap<Version, u32> {
        &self.rarities
    }

    pub fn rarity(&self, version: Version) -> Option<u32> {
        self.rarities.get(&version).copied()
    }
}

/// How a Pokémon learns a move in one version group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionGroupDetail {
    group: VersionGroup,
    learn_method: MoveLearnMethod,
    level_learned_at: u32,
}

impl VersionGroupDetail {
    pub fn group(&self) -> VersionGroup {
        self.group
    }

    pub fn learn_method(&self) -> MoveLearnMethod {
        self.learn_method
    }

    /// Zero unless learnt by levelling up.
    pub fn level_learned_at(&self) -> u32 {
        self.level_learned_at
    }
}

/// A move in a Pokémon's learnset. The move itself is fetched separately by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnableMove {
    name: String,
    group_details: Vec<VersionGroupDetail>,
}

impl LearnableMove {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_details(&self) -> &[VersionGroupDetail] {
        &self.group_details
    }

    pub fn detail(&self, group: VersionGroup) -> Option<&VersionGroupDetail> {
        self.group_details.iter().find(|detail| detail.group == group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    name: String,
    id: u32,
    order: i32,
    height: u32,
    weight: u32,
    base_experience: Option<u32>,
    is_default: bool,
    types: TypePair,
    abilities: Vec<PokemonAbility>,
    held_items: Vec<ItemHold>,
    game_indices: BTreeMap<Version, u32>,
    moves: Vec<LearnableMove>,
    species_name: String,
    stats: [Stat; STAT_COUNT],
    sprites: [Sprite; SPRITE_COUNT],
}

impl Pokemon {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Sort order. Almost national order, except families are grouped together.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Height in decimetres.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weight in hectograms.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn base_experience(&self) -> Option<u32> {
        self.base_experience
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn types(&self) -> TypePair {
        self.types
    }

    pub fn abilities(&self) -> &[PokemonAbility] {
        &self.abilities
    }

    pub fn held_items(&self) -> &[ItemHold] {
        &self.held_items
    }

    pub fn game_indices(&self) -> &BTreeMap<Version, u32> {
        &self.game_indices
    }

    pub fn game_index(&self, version: Version) -> Option<u32> {
        self.game_indices.get(&version).copied()
    }

    pub fn moves(&self) -> &[LearnableMove] {
        &self.moves
    }

    /// `None` if this Pokémon can't learn the move.
    pub fn move_named(&self, name: &str) -> Option<&LearnableMove> {
        self.moves.iter().find(|learnable| learnable.name == name)
    }

    pub fn species_name(&self) -> &str {
        &self.species_name
    }

    pub fn stats(&self) -> &[Stat; STAT_COUNT] {
        &self.stats
    }

    pub fn stat(&self, kind: StatKind) -> Option<&Stat> {
        self.stats.iter().find(|stat| stat.kind() == kind)
    }

    pub fn sprites(&self) -> &[Sprite; SPRITE_COUNT] {
        &self.sprites
    }

    pub fn sprite(&self, kind: SpriteKind) -> Option<&Sprite> {
        self.sprites.iter().find(|sprite| sprite.kind() == kind)
    }
}

fn types_from_api(mut types: Vec<ApiPokemonType>) -> Result<TypePair> {
    types.sort_by_key(|ty| ty.slot);
    let mut resolved = types
        .iter()
        .map(|ty| PokemonType::from_resource(&ty.r#type))
        .collect::<Result<Vec<_>>>()?
        .into_iter();
    match (resolved.next(), resolved.next(), resolved.next()) {
        (Some(primary), secondary, None) => Ok(TypePair::new(primary, secondary)),
        (None, ..) => Err(Error::malformed(Pokemon::ENDPOINT, "no types")),
        _ => Err(Error::malformed(
            Pokemon::ENDPOINT,
            format!("{} types", types.len()),
        )),
    }
}

impl Resource for Pokemon {
    const ENDPOINT: &'static str = "pokemon";
    type Api = ApiPokemon;

    fn from_api(api: ApiPokemon) -> Result<Self> {
        let types = types_from_api(api.types)?;

        let mut abilities: Vec<PokemonAbility> = api
            .abilities
            .into_iter()
            .map(|ability| PokemonAbility {
                name: ability.ability.name,
                slot: ability.slot,
                hidden: ability.is_hidden,
            })
            .collect();
        abilities.sort_by_key(|ability| ability.slot);

        let held_items = api
            .held_items
            .into_iter()
            .map(|held| {
                let rarities = held
                    .version_details
                    .iter()
                    .map(|detail| Ok((Version::from_resource(&detail.version)?, detail.rarity)))
                    .collect::<Result<_>>()?;
                Ok(ItemHold {
                    item: held.item.name,
                    rarities,
                })
            })
            .collect::<Result<_>>()?;

        let game_indices = api
            .game_indices
            .iter()
            .map(|index| Ok((Version::from_resource(&index.version)?, index.game_index)))
            .collect::<Result<_>>()?;

        let moves = api
            .moves
            .into_iter()
            .map(|learnable| {
                let group_details = learnable
                    .version_group_details
                    .iter()
                    .map(|detail| {
                        Ok(VersionGroupDetail {
                            group: VersionGroup::from_resource(&detail.version_group)?,
                            learn_method: MoveLearnMethod::from_resource(&detail.move_learn_method)?,
                            level_learned_at: detail.level_learned_at,
                        })
                    })
                    .collect::<Result<_>>()?;
                Ok(LearnableMove {
                    name: learnable.r#move.name,
                    group_details,
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            name: api.name,
            id: api.id,
            order: api.order,
            height: api.height,
            weight: api.weight,
            base_experience: api.base_experience,
            is_default: api.is_default,
            types,
            abilities,
            held_items,
            game_indices,
            moves,
            species_name: api.species.name,
            stats: stats_from_api(Self::ENDPOINT, api.stats)?,
            sprites: sprites_from_api(Self::ENDPOINT, &api.sprites)?,
        })
    }
}
