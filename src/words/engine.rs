//! In-memory word statistics engine.
//!
//! Owns the vocabulary and the keyword search counters behind a single lock,
//! so every public operation observes and leaves both stores consistent.

use super::types::*;

use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Lowercases each char on its own, with no word-final `Σ` -> `ς` rule, so
/// every case variant of a string maps to the same key.
pub(crate) fn normalize(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Default)]
struct Stores {
    /// Lowercase, non-empty words. Ordered so matches come out sorted.
    vocabulary: BTreeSet<String>,
    /// Keyword -> position in `keyword_stats`.
    keyword_index: HashMap<String, usize>,
    /// Stats in first-searched order.
    keyword_stats: Vec<KeywordStat>,
}

impl Stores {
    fn record_keyword(&mut self, keyword: &str) {
        match self.keyword_index.get(keyword) {
            Some(&position) => self.keyword_stats[position].search_count += 1,
            None => {
                self.keyword_index
                    .insert(keyword.to_string(), self.keyword_stats.len());
                self.keyword_stats.push(KeywordStat {
                    keyword: keyword.to_string(),
                    search_count: 1,
                });
            }
        }
    }
}

/// Vocabulary plus keyword search statistics.
///
/// Create one per process and share it as `Arc<WordStatsEngine>`; all methods
/// take `&self` and serialize on an internal mutex.
#[derive(Debug)]
pub struct WordStatsEngine {
    stores: Mutex<Stores>,
}

impl WordStatsEngine {
    /// Creates an engine seeded with [`DEFAULT_WORDS`].
    pub fn new() -> Self {
        let engine = Self::empty();
        engine
            .add_words(&DEFAULT_WORDS)
            .expect("default vocabulary holds distinct, non-empty words");
        engine
    }

    /// Creates an engine with no vocabulary at all.
    pub fn empty() -> Self {
        Self {
            stores: Mutex::new(Stores::default()),
        }
    }

    /// Adds `words` to the vocabulary, lowercased.
    ///
    /// The whole batch is validated before anything is inserted: an empty word,
    /// a word already in the vocabulary, or a word repeated within the batch
    /// rejects the call and leaves the vocabulary untouched. The error names
    /// the first offending word in input order.
    pub fn add_words<S: AsRef<str>>(&self, words: &[S]) -> Result<(), WordsError> {
        let lowercase_words: Vec<String> = words
            .iter()
            .map(|word| normalize(word.as_ref()))
            .collect();

        let mut stores = self.stores.lock();

        {
            let mut batch: HashSet<&str> = HashSet::with_capacity(lowercase_words.len());
            for word in &lowercase_words {
                if word.is_empty() {
                    return Err(WordsError::EmptyWord);
                }
                if stores.vocabulary.contains(word) || !batch.insert(word.as_str()) {
                    return Err(WordsError::DuplicateWord(word.clone()));
                }
            }
        }

        stores.vocabulary.extend(lowercase_words);
        Ok(())
    }

    /// Records `keyword` as searched and returns every vocabulary word that
    /// contains it, in ascending order.
    ///
    /// The search is counted even when nothing matches.
    pub fn search_word(&self, keyword: &str) -> Vec<String> {
        let keyword = normalize(keyword);

        let mut stores = self.stores.lock();
        stores.record_keyword(&keyword);

        stores
            .vocabulary
            .iter()
            .filter(|word| word.contains(keyword.as_str()))
            .cloned()
            .collect()
    }

    /// The five most searched keywords.
    pub fn top5_search_keywords(&self) -> Vec<String> {
        self.top_search_keywords(TOP_KEYWORDS_LIMIT)
    }

    /// The `limit` most searched keywords: highest count first, equal counts
    /// in alphabetical order.
    pub fn top_search_keywords(&self, limit: usize) -> Vec<String> {
        let stores = self.stores.lock();

        let mut ranked: Vec<&KeywordStat> = stores.keyword_stats.iter().collect();
        ranked.sort_by(|a, b| {
            b.search_count
                .cmp(&a.search_count)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });

        ranked
            .into_iter()
            .take(limit)
            .map(|stat| stat.keyword.clone())
            .collect()
    }

    /// How many times `keyword` (any case) has been searched.
    pub fn search_count(&self, keyword: &str) -> i64 {
        let stores = self.stores.lock();
        stores
            .keyword_index
            .get(&normalize(keyword))
            .map(|&position| stores.keyword_stats[position].search_count)
            .unwrap_or(0)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.stores.lock().vocabulary.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.stores.lock().keyword_stats.len()
    }

    pub fn stats(&self) -> EngineStats {
        let stores = self.stores.lock();
        EngineStats {
            vocabulary_size: stores.vocabulary.len(),
            keyword_count: stores.keyword_stats.len(),
            total_searches: stores
                .keyword_stats
                .iter()
                .map(|stat| stat.search_count)
                .sum(),
        }
    }
}

impl Default for WordStatsEngine {
    fn default() -> Self {
        Self::new()
    }
}
