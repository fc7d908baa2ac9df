use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower::Layer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

async fn health_check() -> &'static str {
    "OK"
}

/// Routes of the static site:
///
/// - `/api/health`
/// - `/resources.json`, always revalidated so catalog edits show up on reload
/// - everything else from the frontend build, with unknown paths answered by
///   `index.html` so client-side routes like `/resources` survive a refresh
pub fn build_router(config: &ServerConfig) -> Router {
    let catalog = SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
    .layer(ServeFile::new(&config.catalog_path));

    let site = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route_service("/resources.json", catalog)
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
