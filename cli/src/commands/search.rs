//! One-shot search command

use crate::config::CliConfigLoader;
use crate::dictionary::Dictionary;
use crate::output::print_entries;
use anyhow::Result;
use balti_core::{CacheKey, DictionaryEntry, DictionarySearch, FilterKind, SearchCache};
use std::sync::Arc;
use tracing::{debug, info};

/// Query parameters for a single search
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub query: String,
    pub fuzzy: bool,
    pub filters: Vec<(FilterKind, Vec<String>)>,
    pub json: bool,
}

impl SearchArgs {
    /// Build the cache key for these parameters
    pub fn cache_key(&self) -> CacheKey {
        self.filters.iter().fold(
            CacheKey::new(self.query.clone()).with_fuzzy(self.fuzzy),
            |key, (kind, values)| key.with_filter(*kind, values.iter().cloned()),
        )
    }
}

/// Run one search and print the results
pub async fn search_command(args: SearchArgs, config_loader: CliConfigLoader) -> Result<()> {
    info!("Searching for {:?}", args.query);

    let config = config_loader.load().await?;
    if let Some(source) = &config.source {
        debug!("Using configuration from {}", source.display());
    }
    let dictionary = Dictionary::load_or_sample(config.dictionary.as_deref()).await?;

    // A single query gains nothing from a background sweeper
    let cache = Arc::new(SearchCache::from_settings(&config.settings.cache));
    let search: DictionarySearch<DictionaryEntry> = DictionarySearch::new(config.settings, cache);

    let key = args.cache_key();
    debug!("Cache key: {}", key);
    let outcome = search.search(&key, &dictionary);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.results)?);
    } else {
        print_entries(&outcome.results, outcome.cache_hit);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_from_args() {
        let args = SearchArgs {
            query: "chu".to_string(),
            fuzzy: true,
            filters: vec![
                (FilterKind::Categories, vec!["nature".to_string()]),
                (FilterKind::Tags, vec![]),
            ],
            json: false,
        };

        let expected = CacheKey::new("chu")
            .with_fuzzy(true)
            .with_filter(FilterKind::Categories, ["nature"]);
        assert_eq!(args.cache_key(), expected);
    }
}
