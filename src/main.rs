use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting Macro Scorer...");

    // Settings from env
    let settings = macro_scorer::config::Settings::from_env();

    // Metrics + score store (single writer task owns the file)
    let metrics = macro_scorer::MetricsCollector::new();
    let store = macro_scorer::ScoreStore::open(&settings.scores_path, metrics.clone()).await?;
    info!("✓ Score store ready at {}", settings.scores_path);

    // Create app state
    let state = Arc::new(macro_scorer::AppState::new(store, metrics));

    // Build router
    let app = macro_scorer::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.port)).await?;
    info!("🚀 Macro Scorer listening on port {}", settings.port);

    axum::serve(listener, app).await?;

    Ok(())
}
