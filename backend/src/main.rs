use anyhow::Context;
use dotenvy::dotenv;
use freetools_server::{build_router, catalog, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env().context("Failed to read server configuration")?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,freetools_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist, only /api routes will work",
            config.static_dir.display()
        );
    }
    catalog::check_catalog(&config.catalog_path).await;

    let app = build_router(&config);
    let addr = config.socket_addr();
    tracing::info!("Starting server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
