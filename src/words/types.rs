use serde::{Deserialize, Serialize};

/// Words every engine starts with.
pub const DEFAULT_WORDS: [&str; 7] = ["hello", "goodbye", "list", "search", "filter", "yes", "no"];

/// How many keywords `top5_search_keywords` returns at most.
pub const TOP_KEYWORDS_LIMIT: usize = 5;

/// Search frequency of a single keyword.
///
/// One record exists per distinct lowercase query string, independent of whether
/// the query ever matched a vocabulary word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordStat {
    pub keyword: String,
    pub search_count: i64,
}

/// Point-in-time snapshot of both engine stores.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineStats {
    pub vocabulary_size: usize,
    pub keyword_count: usize,
    pub total_searches: i64,
}

/// Errors returned by `WordStatsEngine::add_words`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WordsError {
    /// The word is already in the vocabulary, or appears twice in the batch.
    #[error("{0} word already exists")]
    DuplicateWord(String),
    /// Empty strings are never stored.
    #[error("empty words cannot be added")]
    EmptyWord,
}
