//! Serve command - start the web frontend server

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use barovia_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Directory containing the static frontend files
    #[arg(long, default_value = "frontend")]
    pub static_dir: PathBuf,
}

/// Run serve command: configure, then block on the server
pub fn run(args: ServeArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting Barovia server on port {}", config.port);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}

fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
    })
}

/// A missing directory only warns; the API still works without a frontend
fn validate_static_dir(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. API routes will still be served.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!("Static path exists but is not a directory: {}", path.display());
    }

    Ok(())
}
