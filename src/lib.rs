//! Typed client for the PokeAPI REST service.
//!
//! Each call fetches one resource, parses the JSON body and maps it into an
//! immutable value. Enumerated fields (types, versions, learn methods, ...)
//! are resolved against closed enumerations; an unrecognized name is an
//! error, never a silent default.

pub mod names;

pub mod ability;
pub mod api;
pub mod blocking;
pub mod client;
pub mod config;
pub mod encounter;
pub mod error;
pub mod lang;
pub mod moves;
pub mod pokedex;
pub mod pokemon;
pub mod species;
pub mod sprite;
pub mod stat;
pub mod types;
pub mod version;

pub use ability::*;
pub use api::*;
pub use client::*;
pub use config::*;
pub use encounter::*;
pub use error::*;
pub use lang::*;
pub use moves::*;
pub use pokedex::*;
pub use pokemon::*;
pub use species::*;
pub use sprite::*;
pub use stat::*;
pub use types::*;
pub use version::*;
