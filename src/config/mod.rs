//! Service Configuration
//!
//! Resolves where the config file lives (command line) and what it contains
//! (JSON with the listen address and the stats reporting period).

pub mod loader;
