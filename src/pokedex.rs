//! Caught-Pokemon Registry
//!
//! In-memory record of the Pokemon caught during this session, keyed by
//! name. Nothing is persisted: a new session starts with an empty Pokedex.

use std::collections::HashMap;

use crate::models::Pokemon;

// == Pokedex ==
/// The user's collection of caught Pokemon.
#[derive(Debug, Default)]
pub struct Pokedex {
    items: HashMap<String, Pokemon>,
}

impl Pokedex {
    // == Constructor ==
    /// Creates an empty Pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Records a caught Pokemon. Catching the same Pokemon again simply
    /// refreshes the stored document.
    pub fn add(&mut self, pokemon: Pokemon) {
        self.items.insert(pokemon.name.clone(), pokemon);
    }

    // == Contains ==
    /// Whether a Pokemon with this name has been caught.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    // == Get ==
    /// The caught Pokemon with this name, if any.
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.items.get(name)
    }

    // == Names ==
    /// Names of all caught Pokemon, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // == Is Empty ==
    /// True if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // == Length ==
    /// Number of distinct Pokemon caught.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
