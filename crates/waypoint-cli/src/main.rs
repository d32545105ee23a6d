//! # waypoint-cli
//!
//! Offline tooling for route-table files.
//!
//! ## Usage
//!
//! - `waypoint-cli check routes.toml` - validate a table (non-zero exit on error)
//! - `waypoint-cli routes routes.toml` - list the registered routes
//! - `waypoint-cli resolve routes.toml /countdown /missing` - resolve locations
//! - `waypoint-cli href routes.toml User id=42` - render a named route as an href

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Route-table tooling
#[derive(Parser)]
#[command(name = "waypoint-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and exercise client-side route tables")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a route-table file
    Check {
        file: PathBuf,
    },

    /// List registered routes in match order
    Routes {
        file: PathBuf,
    },

    /// Resolve locations against the table
    Resolve {
        file: PathBuf,

        /// Locations to resolve (e.g. /countdown)
        #[arg(required = true)]
        locations: Vec<String>,

        /// Treat inputs as host URLs and read them through the history mode
        #[arg(long)]
        url: bool,

        /// Fail if any location is not found
        #[arg(long)]
        strict: bool,
    },

    /// Render a named route as an href
    Href {
        file: PathBuf,

        /// Route name
        name: String,

        /// Parameters as KEY=VALUE
        params: Vec<String>,

        /// Raw query string to append
        #[arg(long)]
        query: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Check { file } => commands::check(&commands::load(&file)?, &mut out),
        Commands::Routes { file } => commands::routes(&commands::load(&file)?, &mut out),
        Commands::Resolve {
            file,
            locations,
            url,
            strict,
        } => {
            let config = commands::load(&file)?;
            let options = commands::ResolveOptions { url, strict };
            commands::resolve(&config, &locations, options, &mut out)
        }
        Commands::Href {
            file,
            name,
            params,
            query,
        } => commands::href(&commands::load(&file)?, &name, &params, query, &mut out),
    }
}
