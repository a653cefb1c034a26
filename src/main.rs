use std::sync::Arc;
use std::time::Duration;
use word_search_system::config::loader::{load_config, parse_args};
use word_search_system::words::engine::WordStatsEngine;
use word_search_system::words::handlers::router;
use word_search_system::words::reporter::spawn_stats_reporter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    // 1. Config:
    let config = match load_config(&cli.config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {:#}", e);
            eprintln!("Usage: {} [--config <path/to/config.json>]", args[0]);
            std::process::exit(1);
        }
    };

    tracing::info!("Word search system has started");

    // 2. Engine:
    let engine = Arc::new(WordStatsEngine::new());
    tracing::info!("Vocabulary seeded with {} words", engine.vocabulary_size());

    // 3. Spawn stats reporter:
    spawn_stats_reporter(
        engine.clone(),
        Duration::from_secs(config.stats_interval_secs),
    );

    // 4. Start HTTP server:
    let app = router(engine);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Word search system stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
