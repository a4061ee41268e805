//! Blog Service Server
//!
//! Loads configuration, connects the document store and serves the HTTP API.

use std::path::Path;

use anyhow::Context;
use blog_service::core::{config::StorageBackend, create_app_state, logging, Config};
use clap::{Arg, ArgMatches, Command};
use tracing::info;

#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = Command::new(blog_service::NAME)
        .version(blog_service::VERSION)
        .about("HTTP CRUD service for posts, comments, users and profiles.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("http-addr")
                .long("http-addr")
                .value_name("ADDR")
                .help("HTTP server bind address")
        )
        .arg(
            Arg::new("storage")
                .long("storage")
                .value_name("BACKEND")
                .help("Document store backend (mongo, memory)")
        )
        .arg(
            Arg::new("mongo-uri")
                .long("mongo-uri")
                .value_name("URI")
                .help("MongoDB connection string")
        )
        .arg(
            Arg::new("database")
                .long("database")
                .value_name("NAME")
                .help("Database holding the collections")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .get_matches();

    // Load configuration
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let mut config = Config::load(config_path).context("Failed to load configuration")?;

    // Apply CLI overrides
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    // Initialize logging
    logging::init_tracing(&config.logging)?;

    info!("Starting {} v{}", blog_service::NAME, blog_service::VERSION);
    if config.storage.backend == StorageBackend::Memory {
        info!("Board posts, counters and documents are all held in memory");
    }

    let app_state = create_app_state(config)
        .await
        .context("Failed to initialize application state")?;

    blog_service::api::start_server(app_state)
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(addr) = matches.get_one::<String>("http-addr") {
        config.server.http_addr = addr
            .parse()
            .with_context(|| format!("Invalid HTTP address: {}", addr))?;
    }

    if let Some(backend) = matches.get_one::<String>("storage") {
        config.storage.backend = backend.parse()?;
    }

    if let Some(uri) = matches.get_one::<String>("mongo-uri") {
        config.storage.mongo_uri = uri.clone();
    }

    if let Some(database) = matches.get_one::<String>("database") {
        config.storage.database = database.clone();
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    Ok(())
}
