use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::names::api_enum;

api_enum! {
    pub enum SpriteKind("sprite") {
        FrontDefault => "front_default",
        FrontShiny => "front_shiny",
        FrontFemale => "front_female",
        FrontShinyFemale => "front_shiny_female",
        BackDefault => "back_default",
        BackShiny => "back_shiny",
        BackFemale => "back_female",
        BackShinyFemale => "back_shiny_female",
    }
}

pub const SPRITE_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sprite {
    kind: SpriteKind,
    url: Option<String>,
}

impl Sprite {
    pub fn kind(&self) -> SpriteKind {
        self.kind
    }

    /// `None` when the game has no such sprite for this Pokémon.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// One entry per `SpriteKind` read from the `sprites` object. Missing or null
/// keys become sprites without a URL.
pub(crate) fn sprites_from_api(kind: &'static str, sprites: &Map<String, Value>) -> Result<[Sprite; SPRITE_COUNT]> {
    let sprites: Vec<Sprite> = SpriteKind::ALL
        .iter()
        .map(|sprite_kind| {
            let url = match sprites.get(sprite_kind.api_name()) {
                None | Some(Value::Null) => None,
                Some(Value::String(url)) => Some(url.clone()),
                Some(other) => {
                    return Err(Error::malformed(
                        kind,
                        format!("sprite {sprite_kind} is not a string: {other}"),
                    ));
                }
            };
            Ok(Sprite {
                kind: *sprite_kind,
                url,
            })
        })
        .collect::<Result<_>>()?;
    sprites
        .try_into()
        .map_err(|_| Error::malformed(kind, "sprite table has the wrong size"))
}
