mod app;
mod config;
mod error;
mod feeds;
mod handlers;
mod state;
mod ui_state;

use clap::Parser;
use config::ServerConfig;
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(name = "dashboard-server")]
#[command(about = "Home dashboard server")]
struct Args {
    /// Path to frontend dist directory to serve
    #[arg(long, default_value = "frontend/dist")]
    frontend_dist: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    tracing::info!("Dashboard title: {}", config.dashboard.title);

    let app_state = Arc::new(AppState::new(config.dashboard.clone()));

    // Setup CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app::with_frontend(app::api_router(app_state.clone()), &args.frontend_dist)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Run the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app_state.mark_ready();
    axum::serve(listener, app).await?;

    Ok(())
}
