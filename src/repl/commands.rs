//! REPL Commands
//!
//! One handler per command, all operating on the shared [`App`] context.
//! Handlers print their results directly; fetch failures bubble up to the
//! read loop, which reports them and keeps the session alive.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::models::LocationAreaPage;
use crate::pokeapi::PokeApiClient;
use crate::pokedex::Pokedex;

/// Upper bound (exclusive) of the catch roll. A Pokemon whose base
/// experience meets or exceeds the roll escapes, so anything at 400+
/// base experience is uncatchable.
pub const CATCH_ROLL_MAX: u32 = 400;

// == Command Table ==
/// Command names and help text, in help-display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("map", "Displays the names of the next page of location areas"),
    ("mapb", "Displays the names of the previous page of location areas"),
    ("explore <area>", "Displays the Pokemon found in a location area"),
    ("catch <pokemon>", "Throws a Pokeball; a caught Pokemon joins your Pokedex"),
    ("inspect <pokemon>", "Shows details about a caught Pokemon"),
    ("pokedex", "Lists all the Pokemon you have caught"),
    ("cache", "Shows response cache statistics"),
    ("help", "Displays this help message"),
    ("exit", "Exits the Pokedex"),
];

// == App Context ==
/// Session state shared by every command.
pub struct App {
    /// Cache-backed API client
    pub client: PokeApiClient,
    /// Caught Pokemon
    pub pokedex: Pokedex,
    /// URL of the next location-area page, None past the last page
    pub next: Option<String>,
    /// URL of the previous location-area page, None on the first page
    pub previous: Option<String>,
}

impl App {
    /// Creates the session context, with the map cursor pointing at the
    /// first page of location areas.
    pub fn new(client: PokeApiClient, page_limit: u32) -> Self {
        let first_page = client.location_areas_url(page_limit);
        Self {
            client,
            pokedex: Pokedex::new(),
            next: Some(first_page),
            previous: None,
        }
    }

    /// Updates both pagination cursors from a fetched page.
    pub fn apply_page(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }

    /// Stops the cache reaper. Call once when the session ends.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

// == Help ==
pub fn command_help() {
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    println!();
    for (name, description) in COMMANDS {
        println!("{name}: {description}");
    }
}

// == Map / Mapb ==
/// Shows the next page of location areas.
pub async fn command_map(app: &mut App) -> Result<()> {
    let Some(url) = app.next.clone() else {
        println!("you're on the last page");
        return Ok(());
    };
    show_location_page(app, &url).await
}

/// Shows the previous page of location areas.
pub async fn command_mapb(app: &mut App) -> Result<()> {
    let Some(url) = app.previous.clone() else {
        println!("you're on the first page");
        return Ok(());
    };
    show_location_page(app, &url).await
}

async fn show_location_page(app: &mut App, url: &str) -> Result<()> {
    let page = app.client.location_areas(url).await?;
    for area in &page.results {
        println!("{}", area.name);
    }
    app.apply_page(&page);
    Ok(())
}

// == Explore ==
/// Lists the Pokemon encountered in a location area.
pub async fn command_explore(app: &mut App, area_name: &str) -> Result<()> {
    println!("Exploring {area_name}...");
    let area = app.client.location_area(area_name).await?;

    println!("Found Pokemon:");
    for encounter in &area.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(())
}

// == Catch ==
/// Throws a Pokeball: a random roll against the Pokemon's base experience
/// decides whether it joins the Pokedex.
pub async fn command_catch(app: &mut App, name: &str) -> Result<()> {
    println!("Throwing a Pokeball at {name}...");
    let pokemon = app.client.pokemon(name).await?;

    let roll = rand::thread_rng().gen_range(0..CATCH_ROLL_MAX);
    debug!(roll, base_experience = ?pokemon.base_experience, "catch attempt");
    if catch_succeeds(roll, pokemon.base_experience.unwrap_or(0)) {
        println!("{name} was caught!");
        app.pokedex.add(pokemon);
    } else {
        println!("{name} escaped!");
    }
    Ok(())
}

/// A catch lands when the roll beats the Pokemon's base experience.
pub fn catch_succeeds(roll: u32, base_experience: u32) -> bool {
    roll > base_experience
}

// == Inspect ==
/// Prints the details of an already-caught Pokemon.
pub async fn command_inspect(app: &mut App, name: &str) -> Result<()> {
    if !app.pokedex.contains(name) {
        println!("you have not caught that pokemon");
        return Ok(());
    }

    // Refetch rather than reading the stored copy: the response cache makes
    // this free within the TTL, and it keeps the output current beyond it.
    let pokemon = app.client.pokemon(name).await?;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  -{}: {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for slot in &pokemon.types {
        println!("  -{}", slot.kind.name);
    }
    Ok(())
}

// == Pokedex ==
/// Lists every caught Pokemon.
pub fn command_pokedex(app: &App) {
    if app.pokedex.is_empty() {
        println!("Your Pokedex is empty!");
        return;
    }

    println!("Your Pokedex:");
    for name in app.pokedex.names() {
        println!(" - {name}");
    }
}

// == Cache ==
/// Shows response cache statistics.
pub async fn command_cache(app: &App) {
    let stats = app.client.cache().stats().await;
    println!("Cache entries: {}", stats.total_entries);
    println!("Hits: {}", stats.hits);
    println!("Misses: {}", stats.misses);
    println!("Reaped: {}", stats.reaped);
    println!("Hit rate: {:.0}%", stats.hit_rate * 100.0);
}
