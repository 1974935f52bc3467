//! Barovia Server - HTTP API for the web frontend
//!
//! This crate provides the web backend:
//! - REST API for session operations
//! - Board geometry for the renderer
//! - Static file serving for the frontend

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "frontend".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::get_status))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game/state", get(routes::game::get_state))
        .route("/api/game/new", post(routes::game::new_game))
        .route("/api/game/move", post(routes::game::make_move))
        .route("/api/game/save", post(routes::game::save_game))
        .route("/api/game/load", post(routes::game::load_game))
        .route("/api/game/export", post(routes::game::export_save))
        .route("/api/game/import", post(routes::game::import_save))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new());
    let router = create_router(&config, state);

    tracing::info!("Barovia server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
