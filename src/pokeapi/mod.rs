//! PokeAPI Client Module
//!
//! HTTP access to the PokeAPI REST service, memoized through the response
//! cache.

mod client;

pub use client::PokeApiClient;
