//! Pokedex CLI - an interactive Pokedex backed by PokeAPI
//!
//! A read-eval-print loop over the PokeAPI REST service with an in-memory,
//! time-expiring response cache in front of every fetch.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{CliError, Result};
pub use pokeapi::PokeApiClient;
