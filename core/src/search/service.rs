//! Cached dictionary search
//!
//! [`DictionarySearch`] follows the lookup flow callers would otherwise
//! repeat by hand: encode the query, probe the cache, and on a miss fetch
//! entries from the source, filter and rank them, then store the result.
//!
//! Nothing here invalidates cached results when dictionary data changes.
//! Callers that edit entries decide when to call [`DictionarySearch::invalidate`]
//! or [`DictionarySearch::invalidate_all`].

use super::cache::SearchCache;
use super::entry::{EntrySource, SearchableEntry};
use super::fuzzy::fuzzy_filter_entries;
use super::key::CacheKey;
use crate::config::SearchSettings;
use std::sync::Arc;
use tracing::debug;

/// Results of a search and whether they came from the cache
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<E> {
    pub results: Vec<E>,
    pub cache_hit: bool,
}

/// Dictionary search backed by a shared result cache
pub struct DictionarySearch<E> {
    cache: Arc<SearchCache<Vec<E>>>,
    settings: SearchSettings,
}

impl<E> DictionarySearch<E>
where
    E: SearchableEntry + Clone + Send + 'static,
{
    /// Create a search service over an existing cache
    pub fn new(settings: SearchSettings, cache: Arc<SearchCache<Vec<E>>>) -> Self {
        Self { cache, settings }
    }

    /// Create a search service with its own cache and start the cache sweeper
    pub fn create(settings: SearchSettings) -> Self {
        let cache = Arc::new(SearchCache::create(&settings.cache));
        Self::new(settings, cache)
    }

    pub fn cache(&self) -> &Arc<SearchCache<Vec<E>>> {
        &self.cache
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Run a query, serving it from the cache when possible
    pub fn search<S>(&self, key: &CacheKey, source: &S) -> SearchOutcome<E>
    where
        S: EntrySource<E> + ?Sized,
    {
        let encoded = key.encode();

        if let Some(results) = self.cache.get(&encoded) {
            return SearchOutcome {
                results,
                cache_hit: true,
            };
        }

        let results = self.compute(key, source);
        debug!("Computed {} results for {}", results.len(), encoded);
        self.cache.set(encoded, results.clone());

        SearchOutcome {
            results,
            cache_hit: false,
        }
    }

    /// Drop the cached result for one query
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        self.cache.invalidate(&key.encode())
    }

    /// Drop every cached result
    pub fn invalidate_all(&self) {
        self.cache.clear();
    }

    /// Stop the cache sweeper
    pub fn destroy(&self) {
        self.cache.destroy();
    }

    fn compute<S>(&self, key: &CacheKey, source: &S) -> Vec<E>
    where
        S: EntrySource<E> + ?Sized,
    {
        let candidates: Vec<E> = source
            .fetch()
            .into_iter()
            .filter(|entry| matches_filters(entry, key))
            .collect();

        let mut results = if key.fuzzy() {
            fuzzy_filter_entries(candidates, key.query(), self.settings.fuzzy_threshold)
        } else {
            let query = key.query().to_lowercase();
            candidates
                .into_iter()
                .filter(|entry| contains_ignore_case(entry, &query))
                .collect()
        };

        if let Some(limit) = self.settings.result_limit {
            results.truncate(limit);
        }

        results
    }
}

/// Whether an entry satisfies every filter of the query
///
/// An entry passes a filter when any of its values for that kind is in the
/// requested set.
fn matches_filters<E: SearchableEntry>(entry: &E, key: &CacheKey) -> bool {
    key.filters().all(|(kind, wanted)| {
        entry
            .filter_values(kind)
            .iter()
            .any(|value| wanted.contains(*value))
    })
}

fn contains_ignore_case<E: SearchableEntry>(entry: &E, lowercase_query: &str) -> bool {
    entry.primary_text().to_lowercase().contains(lowercase_query)
        || entry.secondary_text().to_lowercase().contains(lowercase_query)
}
