use super::engine::WordStatsEngine;
use super::protocol::*;
use super::types::{EngineStats, WordsError};

use axum::{
    Extension, Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

/// Builds the HTTP router serving every word search endpoint against `engine`.
pub fn router(engine: Arc<WordStatsEngine>) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH_WORD, post(handle_search_word))
        .route(ENDPOINT_ADD_WORDS, post(handle_add_words))
        .route(ENDPOINT_TOP5_SEARCH_KEYWORDS, get(handle_top5_search_keywords))
        .route(ENDPOINT_STATS, get(handle_stats))
        .layer(Extension(engine))
}

pub async fn handle_search_word(
    Extension(engine): Extension<Arc<WordStatsEngine>>,
    Json(req): Json<SearchWordRequest>,
) -> (StatusCode, Json<SearchWordReply>) {
    let matches = engine.search_word(&req.key_word);
    tracing::debug!("Search for '{}' matched {} words", req.key_word, matches.len());

    (StatusCode::OK, Json(SearchWordReply { matches }))
}

pub async fn handle_add_words(
    Extension(engine): Extension<Arc<WordStatsEngine>>,
    Json(req): Json<AddWordsRequest>,
) -> (StatusCode, Json<AddWordsReply>) {
    match engine.add_words(&req.words) {
        Ok(()) => {
            tracing::debug!("Added {} words", req.words.len());
            (StatusCode::OK, Json(AddWordsReply::default()))
        }
        Err(e) => {
            tracing::warn!("Rejected add of {} words: {}", req.words.len(), e);
            let status = match &e {
                WordsError::DuplicateWord(_) => StatusCode::CONFLICT,
                WordsError::EmptyWord => StatusCode::BAD_REQUEST,
            };
            (
                status,
                Json(AddWordsReply {
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_top5_search_keywords(
    Extension(engine): Extension<Arc<WordStatsEngine>>,
) -> (StatusCode, Json<Top5SearchKeyWordsReply>) {
    let keywords = engine.top5_search_keywords();

    (StatusCode::OK, Json(Top5SearchKeyWordsReply { keywords }))
}

pub async fn handle_stats(
    Extension(engine): Extension<Arc<WordStatsEngine>>,
) -> (StatusCode, Json<EngineStats>) {
    (StatusCode::OK, Json(engine.stats()))
}
