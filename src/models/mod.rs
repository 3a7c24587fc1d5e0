//! PokeAPI response models
//!
//! Serde mappings for the JSON documents the commands consume. Only the
//! fields the CLI displays are mapped; everything else is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
