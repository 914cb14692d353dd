mod config;
mod routes;
mod services;
mod state;

use std::io;

use config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: io::Error },
    #[error("server failed: {0}")]
    Serve(io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is the normal case in production.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
        }
    }

    let site = SiteConfig::from_env()?;
    let addr = site.addr();
    tracing::info!(site_dir = %site.site_dir.display(), index = %site.index, "serving site");

    let app = routes::app(state::AppState::with_log_notifier(site));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "storefront listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
