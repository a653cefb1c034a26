//! Word Search System Library
//!
//! This library crate defines the modules behind the word search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`words`**: The in-memory vocabulary and keyword statistics engine, plus the
//!   HTTP handlers that expose search, bulk add and top keyword ranking.
//! - **`config`**: Command line parsing and the JSON config file holding the
//!   listen address.

pub mod config;
pub mod words;
