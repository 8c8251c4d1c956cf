//! Dictionary search core
//!
//! This module provides the pieces the calling layer combines into a search:
//! - Edit-distance scoring and fuzzy filtering
//! - Canonical cache keys for structured queries
//! - A TTL result cache with a background expiry sweeper
//! - Static suggestions for empty-query UX

pub mod cache;
pub mod entry;
pub mod fuzzy;
pub mod key;
pub mod scorer;
pub mod service;
pub mod suggestions;


// Export the main interfaces
pub use cache::{CacheEntryStats, CacheStats, SearchCache};
pub use entry::{DictionaryEntry, EntrySource, SearchableEntry};
pub use fuzzy::{fuzzy_filter, fuzzy_filter_entries, DEFAULT_THRESHOLD};
pub use key::{CacheKey, FilterKind};
pub use scorer::{distance, fuzzy_score};
pub use service::{DictionarySearch, SearchOutcome};
pub use suggestions::{
    by_category, filter_by_input, random_suggestions, SearchSuggestion, SUGGESTIONS,
};
