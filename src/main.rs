//! Pokedex CLI - an interactive Pokedex backed by PokeAPI
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the response cache (starts the background reaper)
//! 4. Build the cache-backed API client and session state
//! 5. Run the REPL until exit
//! 6. Stop the reaper before the process ends

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::cache::Cache;
use pokedex_cli::config::Config;
use pokedex_cli::pokeapi::PokeApiClient;
use pokedex_cli::repl::{self, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        base_url = %config.api_base_url,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        page_limit = config.page_limit,
        "configuration loaded"
    );

    let cache = Cache::new(config.cache_ttl);
    let client = PokeApiClient::new(&config, cache);
    let mut app = App::new(client, config.page_limit);

    repl::run(&mut app).await?;

    // Stop the reaper so the background task does not outlive the session.
    app.shutdown().await;
    info!("session closed");

    Ok(())
}
