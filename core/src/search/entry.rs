//! Searchable records and the collection they come from

use super::key::FilterKind;
use serde::{Deserialize, Serialize};

/// A record the search core can score and filter
///
/// The core only reads two text fields, a primary representation (the Balti
/// word) and a secondary one (its translation), plus whatever values the
/// record carries for each filter kind.
pub trait SearchableEntry {
    /// Primary text, e.g. the source-language word
    fn primary_text(&self) -> &str;

    /// Secondary text, e.g. the translation
    fn secondary_text(&self) -> &str;

    /// Values this record has for a filter kind
    fn filter_values(&self, _kind: FilterKind) -> Vec<&str> {
        Vec::new()
    }
}

/// Read-only collection of entries owned by an external data layer
pub trait EntrySource<E> {
    /// Fetch the entries a search runs over
    fn fetch(&self) -> Vec<E>;
}

impl<E: Clone> EntrySource<E> for [E] {
    fn fetch(&self) -> Vec<E> {
        self.to_vec()
    }
}

impl<E: Clone> EntrySource<E> for Vec<E> {
    fn fetch(&self) -> Vec<E> {
        self.clone()
    }
}

/// A Balti-English dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Balti word
    pub word: String,

    /// English translation
    pub translation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl DictionaryEntry {
    /// Create an entry with only its two text fields set
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            category: None,
            dialect: None,
            difficulty: None,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

impl SearchableEntry for DictionaryEntry {
    fn primary_text(&self) -> &str {
        &self.word
    }

    fn secondary_text(&self) -> &str {
        &self.translation
    }

    fn filter_values(&self, kind: FilterKind) -> Vec<&str> {
        match kind {
            FilterKind::Categories => self.category.as_deref().into_iter().collect(),
            FilterKind::Dialects => self.dialect.as_deref().into_iter().collect(),
            FilterKind::Difficulty => self.difficulty.as_deref().into_iter().collect(),
            FilterKind::Tags => self.tags.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_values() {
        let entry = DictionaryEntry::new("chu", "water")
            .with_category("nature")
            .with_tag("common")
            .with_tag("a1");

        assert_eq!(entry.filter_values(FilterKind::Categories), vec!["nature"]);
        assert!(entry.filter_values(FilterKind::Dialects).is_empty());
        assert_eq!(entry.filter_values(FilterKind::Tags), vec!["common", "a1"]);
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word": "ri", "translation": "mountain"}"#).unwrap();
        assert_eq!(entry, DictionaryEntry::new("ri", "mountain"));
    }

    #[test]
    fn test_vec_is_an_entry_source() {
        let entries = vec![DictionaryEntry::new("chu", "water")];
        assert_eq!(entries.fetch(), entries);
    }
}
