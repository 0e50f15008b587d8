use serde::{Deserialize, Serialize};

use crate::api::NamedApiResource;
use crate::error::{Error, Result};
use crate::names::api_enum;

api_enum! {
    /// The permanent stats every Pokémon has a base value for.
    pub enum StatKind("stat") {
        Hp => "hp",
        Attack => "attack",
        Defense => "defense",
        SpecialAttack => "special-attack",
        SpecialDefense => "special-defense",
        Speed => "speed",
    }
}

api_enum! {
    /// Stats a move can raise or lower during battle.
    pub enum BattleStat("battle stat") {
        Attack => "attack",
        Defense => "defense",
        SpecialAttack => "special-attack",
        SpecialDefense => "special-defense",
        Speed => "speed",
        Accuracy => "accuracy",
        Evasion => "evasion",
    }
}

pub const STAT_COUNT: usize = 6;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiStat {
    base_stat: u32,
    effort: u32,
    stat: NamedApiResource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    kind: StatKind,
    effort: u32,
    base_stat: u32,
}

impl Stat {
    pub fn kind(&self) -> StatKind {
        self.kind
    }

    /// Effort points gained for defeating this Pokémon.
    pub fn effort(&self) -> u32 {
        self.effort
    }

    pub fn base_stat(&self) -> u32 {
        self.base_stat
    }
}

/// Builds one entry per `StatKind`, in `StatKind::ALL` order.
pub(crate) fn stats_from_api(kind: &'static str, stats: Vec<ApiStat>) -> Result<[Stat; STAT_COUNT]> {
    let mut slots: [Option<Stat>; STAT_COUNT] = [None; STAT_COUNT];
    for stat in stats {
        let stat_kind = StatKind::from_resource(&stat.stat)?;
        let slot = &mut slots[stat_kind as usize];
        if slot.is_some() {
            return Err(Error::malformed(kind, format!("duplicate stat {stat_kind}")));
        }
        *slot = Some(Stat {
            kind: stat_kind,
            effort: stat.effort,
            base_stat: stat.base_stat,
        });
    }

    let mut result = Vec::with_capacity(STAT_COUNT);
    for (stat_kind, slot) in StatKind::ALL.iter().zip(slots) {
        result.push(slot.ok_or_else(|| Error::malformed(kind, format!("missing stat {stat_kind}")))?);
    }
    result
        .try_into()
        .map_err(|_| Error::malformed(kind, "stat table has the wrong size"))
}
