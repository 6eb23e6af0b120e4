// Main entry point - Dependency injection and shell startup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;

use crate::application::render_pipeline::RenderPipeline;
use crate::application::season_cache::SeasonCache;
use crate::domain::season::Season;
use crate::infrastructure::config::load_solar_config;
use crate::infrastructure::supabase_repository::SupabaseRepository;
use crate::presentation::console::{ConsoleChart, ConsoleLegend, ConsoleMap};
use crate::presentation::shell::Shell;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_solar_config().context("Failed to load solar configuration")?;
    let default_season: Season = config
        .app
        .default_season
        .parse()
        .context("Invalid default_season in configuration")?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SupabaseRepository::new(
        config.supabase.url,
        config.supabase.anon_key,
        config.supabase.table,
    ));

    // Create the pipeline over console widgets (application layer)
    let cache = SeasonCache::new(repository);
    let pipeline = Arc::new(RenderPipeline::new(
        cache,
        ConsoleMap::new(),
        ConsoleChart,
        ConsoleLegend,
    ));

    // Run the interactive shell; it renders the default season on startup
    Shell::new(pipeline, default_season).run().await
}
