//! # balti-core
//!
//! Search core for the community Balti-English dictionary.
//!
//! The crate is consumed as a library by a calling layer that owns request
//! parsing and data access. It provides:
//! - an edit-distance scorer and a fuzzy filter built on it
//! - a canonical cache key codec for structured queries
//! - a TTL result cache with a background expiry sweeper
//! - a static suggestion provider for empty-query UX
//! - [`DictionarySearch`], which wires the pieces together

pub mod config;
pub mod error;
pub mod search;

// Re-export commonly used types
pub use config::{CacheSettings, SearchSettings};
pub use error::{ConfigError, Error, Result};
pub use search::{
    CacheKey, CacheStats, DictionaryEntry, DictionarySearch, EntrySource, FilterKind,
    SearchCache, SearchOutcome, SearchSuggestion, SearchableEntry,
};

/// Current version of the balti-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
