//! TickTick MCP Server
//!
//! Model Context Protocol server exposing TickTick projects and tasks to LLM
//! agents over stdio.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use ticktick_mcp::context::ConfigSource;
use ticktick_mcp::server::TickTickMcpServer;

#[derive(Debug, Parser)]
#[command(name = "ticktick-mcp", version, about = "TickTick MCP server (stdio transport)")]
struct Cli {
    /// Path to a TOML config file (defaults to ./.ticktick-mcp.toml, then ~/.config/ticktick-mcp.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a .env file holding TICKTICK_ACCESS_TOKEN
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log level for the ticktick crates; ignored when RUST_LOG is set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Start without verifying credentials; the client connects on first tool call
    #[arg(long)]
    skip_startup_check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            &cli.log_level,
        )?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("ticktick-mcp starting (stdio transport)");

    let server = TickTickMcpServer::from_source(ConfigSource {
        config_path: cli.config,
        env_file: cli.env_file,
    });

    if !cli.skip_startup_check {
        if let Err(message) = server.context().ensure_client().await {
            bail!(message);
        }
    }

    let transport = rmcp::transport::io::stdio();
    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}

/// `RUST_LOG` wins when set and valid; otherwise `level` applies to both crates.
fn log_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter, ParseError> {
    if let Some(filter) = rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
    {
        return Ok(filter);
    }
    EnvFilter::try_new(format!("ticktick_mcp={level},ticktick_client={level}"))
}
