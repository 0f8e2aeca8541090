//! trivia CLI - run and manage the trivia question API
//!
//! Subcommands:
//! - `serve` starts the HTTP API (runs migrations on startup)
//! - `migrate` prepares the schema and seeds categories without serving

use anyhow::Result;
use clap::{Parser, Subcommand};

mod migrate;
mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question API server backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
    /// Run database migrations and seed the fixed categories
    Migrate(migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Migrate(args) => migrate::run_migrate(args).await,
    }
}
