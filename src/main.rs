use anyhow::Context;
use dotenvy::dotenv;
use filmrate::app;
use filmrate::config::settings::AppConfig;
use filmrate::infrastructure::db::pool::connect_to_db;
use filmrate::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("filmrate=debug,tower_http=info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new();
    let db = connect_to_db(&config.database_url, config.db_max_connections)
        .await
        .context("failed to open database")?;

    let state = AppState::new(config.clone(), db.clone());
    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
