//! HTTP surface.
//!
//! DESIGN
//! ======
//! Two API routes sit in front of the static site. Everything else falls
//! through to the asset directory, and any path that names no file is
//! answered with the entry document so client-side links always land on
//! the page.


pub mod contact;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let index = ServeFile::new(state.site.index_path());
    let site = ServeDir::new(&state.site.site_dir).fallback(index.clone());

    Router::new()
        // Other methods on the contact path get the entry document like any unmatched GET.
        .route("/api/contact", post(contact::submit).fallback_service(index))
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
