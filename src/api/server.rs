use std::sync::Arc;

use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::{
    services::{artist_detail, artist_detail_root, health, index, method_not_allowed, not_found},
    state::AppState,
};
use crate::catalog::{Endpoints, FetchError, FetcherConfig, HttpCatalog, HttpFetcher, Roster};
use crate::config::Config;

/// Failures that stop the server before it accepts any request.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("artist roster unavailable: {0}")]
    RosterUnavailable(#[from] FetchError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the full route table over `state`.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir)
        .append_index_html_on_directories(false)
        .not_found_service(not_found.into_service());
    let images = ServeDir::new(&state.config.server.images_dir)
        .append_index_html_on_directories(false)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(index))
        .route("/artist/", get(artist_detail_root))
        .route("/artist/{*id}", get(artist_detail))
        .route("/health", get(health))
        .nest_service("/static", static_files)
        .nest_service("/images", images)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch the roster, then serve until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let fetcher = HttpFetcher::new(FetcherConfig::from(&config.upstream))?;
    let catalog = Arc::new(HttpCatalog::new(
        fetcher,
        Endpoints::new(config.upstream.base_url.clone()),
    ));

    info!(url = %catalog.endpoints().roster(), "Fetching artist roster");
    let roster = Roster::load(catalog.as_ref()).await?;
    info!(artists = roster.len(), "Artist roster loaded");

    let address = config.server.bind_addr;
    let state = AppState::new(config, roster, catalog);
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Groupie server listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
