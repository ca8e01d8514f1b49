use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use shapeboard_shared::{ENDPOINT_PORT, SEND_STROKES_PATH};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod logic;
mod state;

use crate::handlers::{ping_handler, send_strokes_handler};
use crate::state::AppState;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long)]
    public_dir: Option<PathBuf>,
    #[arg(long)]
    port: Option<u16>,
}

fn app(public_dir: PathBuf, state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route(SEND_STROKES_PATH, post(send_strokes_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let public_dir = args
        .public_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"));
    if !public_dir.is_dir() {
        tracing::warn!(path = %public_dir.display(), "public dir missing, only the API is served");
    }

    let port = args
        .port
        .or_else(|| {
            std::env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
        })
        .unwrap_or(ENDPOINT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Drawing board running at http://localhost:{port}");
    axum::serve(listener, app(public_dir, AppState::new()))
        .await
        .context("server crashed")?;
    Ok(())
}
