use serde::Serialize;

use crate::names::api_enum;

api_enum! {
    pub enum PokemonType("type") {
        Normal => "normal",
        Fighting => "fighting",
        Flying => "flying",
        Poison => "poison",
        Ground => "ground",
        Rock => "rock",
        Bug => "bug",
        Ghost => "ghost",
        Steel => "steel",
        Fire => "fire",
        Water => "water",
        Grass => "grass",
        Electric => "electric",
        Psychic => "psychic",
        Ice => "ice",
        Dragon => "dragon",
        Dark => "dark",
        Fairy => "fairy",
        Stellar => "stellar",
        Unknown => "unknown",
        Shadow => "shadow",
    }
}

/// A Pokémon's typing: always a primary type, at most one secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypePair {
    primary: PokemonType,
    secondary: Option<PokemonType>,
}

impl TypePair {
    pub fn new(primary: PokemonType, secondary: Option<PokemonType>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> PokemonType {
        self.primary
    }

    pub fn secondary(&self) -> Option<PokemonType> {
        self.secondary
    }

    pub fn contains(&self, ty: PokemonType) -> bool {
        self.primary == ty || self.secondary == Some(ty)
    }

    pub fn to_vec(&self) -> Vec<PokemonType> {
        std::iter::once(self.primary).chain(self.secondary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for ty in PokemonType::ALL {
            assert_eq!(PokemonType::from_api_name(ty.api_name()).unwrap(), *ty);
        }
        assert_eq!(PokemonType::from_api_name("GRASS").unwrap(), PokemonType::Grass);
        assert!(PokemonType::from_api_name("sound").is_err());
    }

    #[test]
    fn test_type_pair() {
        let single = TypePair::new(PokemonType::Fire, None);
        assert_eq!(single.to_vec(), vec![PokemonType::Fire]);

        let dual = TypePair::new(PokemonType::Grass, Some(PokemonType::Poison));
        assert!(dual.contains(PokemonType::Poison));
        assert!(!dual.contains(PokemonType::Fire));
        assert_eq!(dual.to_vec(), vec![PokemonType::Grass, PokemonType::Poison]);
    }
}
