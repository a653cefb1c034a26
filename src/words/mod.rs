//! Word Search Module
//!
//! The core of the service: a growing vocabulary that can be searched by
//! substring, plus statistics on which keywords are searched most.
//!
//! ## Overview
//! All state lives in a single `WordStatsEngine`. It is constructed once at
//! startup, wrapped in an `Arc`, and handed to the HTTP layer as an axum
//! `Extension`. Every engine call runs under one mutex covering both stores.
//!
//! ## Responsibilities
//! - **Search**: Case-insensitive substring matching over the vocabulary, sorted results.
//! - **Add**: All-or-nothing batch insertion; rejects words that already exist.
//! - **Ranking**: Top keywords by search count, ties broken alphabetically.
//!
//! ## Submodules
//! - **`engine`**: The `WordStatsEngine` and its locking discipline.
//! - **`handlers`**: HTTP request handlers and the router for the Axum web server.
//! - **`protocol`**: Endpoint paths and request/reply DTOs.
//! - **`reporter`**: Background task logging engine stats on an interval.
//! - **`types`**: Keyword statistics, engine errors and defaults.

pub mod engine;
pub mod handlers;
pub mod protocol;
pub mod reporter;
pub mod types;
