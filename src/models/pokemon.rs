//! Pokemon response model
//!
//! Document returned by `/pokemon/{name}`, reduced to the fields the
//! `catch` and `inspect` commands use.

use serde::Deserialize;

use super::NamedResource;

/// A single Pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Drives the catch difficulty; null for a few Pokemon
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One base stat, e.g. `hp` or `speed`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot, e.g. `electric`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(pokemon.stats[1].base_stat, 90);
        assert_eq!(pokemon.stats[1].stat.name, "speed");
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_pokemon_null_base_experience_is_none() {
        let json = r#"{
            "name": "zygarde",
            "base_experience": null,
            "height": 50,
            "weight": 3050
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.stats.is_empty());
    }
}
