mod client;
mod commands;

use clap::{Parser, Subcommand};

use commands::create::CreateOpts;
use commands::update::UpdateOpts;

/// Personas API command-line interface
#[derive(Parser)]
#[command(name = "personas")]
#[command(about = "Command-line client for the personas API", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the personas daemon
    #[arg(short, long, global = true, default_value = client::DEFAULT_BASE_URL)]
    url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all personas
    List,
    /// Show a single persona
    Show {
        /// Persona id
        id: i64,
    },
    /// Create a new persona
    Create(CreateOpts),
    /// Update fields of an existing persona
    Update(UpdateOpts),
    /// Delete a persona
    Delete {
        /// Persona id
        id: i64,
    },
    /// Display version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = client::PersonasClient::with_base_url(&cli.url);

    let result = match cli.command {
        Some(Commands::List) => commands::list::list(&client).await,
        Some(Commands::Show { id }) => commands::show::show(&client, id).await,
        Some(Commands::Create(opts)) => commands::create::create(&client, opts).await,
        Some(Commands::Update(opts)) => commands::update::update(&client, opts).await,
        Some(Commands::Delete { id }) => commands::delete::delete(&client, id).await,
        Some(Commands::Version) | None => {
            println!("personas version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
