//! Location-area response models
//!
//! Documents returned by `/location-area` (paginated list) and
//! `/location-area/{name}` (detail with encounters).

use serde::Deserialize;

/// A `{ name, url }` reference, used throughout the API.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u64,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail document for a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
