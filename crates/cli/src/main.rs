//! Auro CLI - Operator queries and storage management.
//!
//! # Usage
//!
//! ```bash
//! # Ask the Operator something
//! auro-cli ask "find ticket 1002"
//!
//! # Same, with the panel payload as JSON
//! auro-cli ask "system status" --json
//!
//! # Write the storefront seed data into a directory
//! auro-cli seed --data-dir ./data
//!
//! # Show what a directory holds, then empty it
//! auro-cli inspect --data-dir ./data
//! auro-cli reset --data-dir ./data
//! ```
//!
//! # Commands
//!
//! - `ask` - Dispatch text against the mock catalog
//! - `seed` - Seed a storefront storage directory
//! - `reset` - Remove every storefront key from a directory
//! - `inspect` - List stored keys and their sizes

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "auro-cli")]
#[command(author, version, about = "Auro CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the Operator a question
    Ask {
        /// The message to send
        text: String,

        /// Print the whole reply, panel payload included, as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the storefront seed collections into a storage directory
    Seed {
        /// Directory holding one JSON file per key
        #[arg(short, long, env = "AURO_DATA_DIR")]
        data_dir: PathBuf,

        /// Overwrite keys that already hold data
        #[arg(short, long)]
        force: bool,
    },
    /// Remove every storefront key from a storage directory
    Reset {
        /// Directory holding one JSON file per key
        #[arg(short, long, env = "AURO_DATA_DIR")]
        data_dir: PathBuf,
    },
    /// List which storefront keys are stored
    Inspect {
        /// Directory holding one JSON file per key
        #[arg(short, long, env = "AURO_DATA_DIR")]
        data_dir: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Ask { text, json } => commands::ask::run(&text, json)?,
        Commands::Seed { data_dir, force } => {
            let storage = commands::storage::open(&data_dir)?;
            commands::storage::seed(&storage, force)?;
        }
        Commands::Reset { data_dir } => {
            let storage = commands::storage::open(&data_dir)?;
            commands::storage::reset(&storage)?;
        }
        Commands::Inspect { data_dir } => {
            let storage = commands::storage::open(&data_dir)?;
            commands::storage::inspect(&storage)?;
        }
    }
    Ok(())
}
