use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::AppConfig;
use trivia_server::db;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create the schema and seed the fixed categories, then exit.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let url = args.database_url.unwrap_or(config.database.url);

    let pool = db::create_pool(&url)
        .await
        .with_context(|| format!("could not connect to '{}'", url))?;
    db::migrations::run(&pool).await.context("migrations failed")?;

    tracing::info!("Schema ready");
    Ok(())
}
