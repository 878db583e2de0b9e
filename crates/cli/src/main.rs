//! Author Desk CLI - console front-end.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shell
//! ad-cli shell
//!
//! # Print stored authors, optionally filtered by name
//! ad-cli list --search anna
//!
//! # Write the seed collection (refuses to overwrite without --force)
//! ad-cli seed --force
//! ```
//!
//! Configuration comes from `AUTHOR_DESK_*` environment variables (see
//! `author_desk_admin::config`). Logs go to stderr; stdout carries only
//! screens and listings.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use author_desk_admin::config::AdminConfig;

mod commands;

#[derive(Parser)]
#[command(name = "ad-cli")]
#[command(author, version, about = "Author Desk console")]
struct Cli {
    /// Override the data directory (`AUTHOR_DESK_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive shell
    Shell,
    /// Print the stored authors
    List {
        /// Only show authors whose first or last name contains TERM
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Write the seed authors to the data directory
    Seed {
        /// Overwrite existing data
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(log_json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("author_desk=info"));

    let json_layer = log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!log_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = AdminConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.log_json));

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mut config: AdminConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Shell => commands::shell::run(&config).await?,
        Commands::List { search } => commands::list::run(&config, search.as_deref()).await?,
        Commands::Seed { force } => commands::seed::run(&config, force)?,
    }
    Ok(())
}
