//! Periodic engine stats logging.

use super::engine::WordStatsEngine;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawns a task logging `engine.stats()` every `period`.
///
/// A zero `period` disables reporting and returns `None`.
pub fn spawn_stats_reporter(
    engine: Arc<WordStatsEngine>,
    period: Duration,
) -> Option<JoinHandle<()>> {
    if period.is_zero() {
        tracing::info!("Stats reporter disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;
            let stats = engine.stats();
            tracing::info!(
                "Engine stats: {} words, {} keywords, {} searches",
                stats.vocabulary_size,
                stats.keyword_count,
                stats.total_searches
            );
        }
    }))
}
