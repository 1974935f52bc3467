//! Run the Barovia server standalone
//!
//! Run with: cargo run -p barovia-server --example run_server

use barovia_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting Barovia server on port {}", config.port);
    println!("Static files from: {}", config.static_dir);
    println!("Open http://localhost:{}/", config.port);

    run_server(config).await
}
