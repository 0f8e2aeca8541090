use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::AppConfig;
use trivia_server::ServerConfig;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind the HTTP server to (overrides TRIVIA_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the HTTP server to (overrides TRIVIA_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::load().context("failed to load configuration")?;

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let bind_addr: SocketAddr = config
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.bind_addr()))?;

    trivia_server::run_server(ServerConfig {
        bind_addr,
        database_url: config.database.url,
    })
    .await?;
    Ok(())
}
