//! Word Search Network Protocol
//!
//! Defines the HTTP endpoints and Data Transfer Objects (DTOs) used by clients
//! of the word search service. All bodies are JSON.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Searches the vocabulary for words containing a keyword.
pub const ENDPOINT_SEARCH_WORD: &str = "/search_word";
/// Adds a batch of words to the vocabulary.
pub const ENDPOINT_ADD_WORDS: &str = "/add_words";
/// Lists the five most searched keywords.
pub const ENDPOINT_TOP5_SEARCH_KEYWORDS: &str = "/top5_search_keywords";
/// Reports store sizes and the total number of searches.
pub const ENDPOINT_STATS: &str = "/stats";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchWordRequest {
    /// The search query. Matched case-insensitively as a substring.
    pub key_word: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchWordReply {
    /// Matching vocabulary words in ascending order. Empty when nothing matched.
    pub matches: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddWordsRequest {
    pub words: Vec<String>,
}

/// Acknowledgement for an add.
///
/// Serializes to `{}` on success. On rejection `error` carries the engine
/// message, e.g. `"super word already exists"`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddWordsReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Top5SearchKeyWordsReply {
    /// Most searched first; equal counts alphabetically.
    pub keywords: Vec<String>,
}
