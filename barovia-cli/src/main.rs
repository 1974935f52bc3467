//! Barovia CLI - command-line interface
//!
//! Commands:
//! - play: interactive session in the terminal
//! - serve: start the web frontend server

mod clipboard;
mod play;
mod serve;
mod storage;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "barovia")]
#[command(about = "Barovia hex exploration toy")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session in the terminal
    Play(play::PlayArgs),
    /// Start the web frontend server
    Serve(serve::ServeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Serve(args) => serve::run(args),
    }
}
