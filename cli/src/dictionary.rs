//! Dictionary data for the CLI
//!
//! Stands in for the database layer: entries come from a JSON file, or from
//! a small built-in sample when no file is configured.

use anyhow::{Context, Result};
use balti_core::{DictionaryEntry, EntrySource};
use std::path::Path;
use tracing::info;

/// An in-memory Balti-English word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self { entries }
    }

    /// Load a JSON array of entries
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dictionary: {}", path.display()))?;

        info!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Self::new(entries))
    }

    /// Load from `path` if given, otherwise use the built-in sample
    pub async fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::sample()),
        }
    }

    /// Built-in sample dictionary
    pub fn sample() -> Self {
        let entry = |word: &str, translation: &str, category: &str| {
            DictionaryEntry::new(word, translation).with_category(category)
        };

        Self::new(vec![
            entry("ju", "hello", "greetings").with_difficulty("beginner"),
            entry("khamzang", "well, in good health", "greetings"),
            entry("chu", "water", "nature").with_difficulty("beginner"),
            entry("ri", "mountain", "nature"),
            entry("kha", "snow", "nature"),
            entry("nyima", "sun", "nature"),
            entry("cha", "tea", "food").with_difficulty("beginner"),
            entry("momo", "steamed dumpling", "food"),
            entry("marzan", "barley porridge", "food").with_dialect("skardu"),
            entry("ama", "mother", "family").with_difficulty("beginner"),
            entry("ata", "father", "family").with_difficulty("beginner"),
            entry("chik", "one", "numbers").with_tag("counting"),
            entry("nyis", "two", "numbers").with_tag("counting"),
            entry("sum", "three", "numbers").with_tag("counting"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntrySource<DictionaryEntry> for Dictionary {
    fn fetch(&self) -> Vec<DictionaryEntry> {
        self.entries.clone()
    }
}
