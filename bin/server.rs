// To-Do Lists - Web Server

use anyhow::{Context, Result};
use clap::Parser;
use todo_lists::{count_items, count_lists, router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_lists=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::parse();
    tracing::info!("To-Do lists server v{}", todo_lists::VERSION);

    let conn = config
        .open_database()
        .with_context(|| format!("Failed to open database {:?}", config.database))?;

    if config.memory {
        tracing::info!("Using in-memory database");
    } else {
        tracing::info!(
            path = ?config.database,
            lists = count_lists(&conn)?,
            items = count_items(&conn)?,
            "Database opened"
        );
    }

    let app = router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    tracing::info!("Server running on http://{}", config.addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
