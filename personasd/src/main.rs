pub mod daemon;
pub mod server;
pub mod store;

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use personas_common::config::{Config, DEFAULT_CONFIG_FILE};
use server::app::AppState;
use store::PersonaStore;

/// Personas CRUD API daemon
#[derive(Parser)]
#[command(name = "personasd")]
#[command(about = "HTTP daemon serving the personas CRUD API", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    conf: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long)]
    host: Option<String>,

    /// TCP port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Path to a JSON seed file loaded into the store at startup
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "personasd=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("personasd - personas CRUD API daemon");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Load configuration
    let mut config = if let Some(conf_path) = cli.conf {
        match Config::from_file(&conf_path) {
            Ok(c) => {
                info!("Loaded configuration from {}", conf_path.display());
                c
            }
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::from_file_or_default(DEFAULT_CONFIG_FILE) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        }
    };

    // Apply CLI overrides
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // Build the store, seeding it if requested
    let mut store = PersonaStore::new();
    if let Some(seed_path) = &config.seed {
        match store::seed::load_seed_file(seed_path) {
            Ok(entries) => {
                let count = entries.len();
                for entry in entries {
                    store.insert(entry);
                }
                info!("Seeded {} personas from {}", count, seed_path.display());
            }
            Err(e) => {
                error!("Failed to load seed file: {}", e);
                std::process::exit(1);
            }
        }
    }

    let state = AppState::new(store);

    if let Err(e) = server::app::run_server(state, &config.host, config.port).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Daemon shutdown complete");
}
