//! Canonical cache keys for structured queries
//!
//! A [`CacheKey`] captures everything that determines a search result: the
//! raw query text, the filter set and the fuzzy flag. Its encoding is a pure
//! function of those three fields, so identical queries issued with filter
//! values in a different order land in the same cache slot.
//!
//! The query text is kept verbatim. "Tea" and "tea" are distinct keys even
//! though the fuzzy scorer itself ignores case.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// The closed set of filters a dictionary query can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Categories,
    Dialects,
    Difficulty,
    Tags,
}

impl FilterKind {
    /// Get the filter name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Categories => "categories",
            FilterKind::Dialects => "dialects",
            FilterKind::Difficulty => "difficulty",
            FilterKind::Tags => "tags",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" | "category" => Ok(FilterKind::Categories),
            "dialects" | "dialect" => Ok(FilterKind::Dialects),
            "difficulty" => Ok(FilterKind::Difficulty),
            "tags" | "tag" => Ok(FilterKind::Tags),
            other => Err(format!("Unknown filter kind: {}", other)),
        }
    }
}

/// A structured search query, usable as a cache key
///
/// Filter kinds map to sets of values. A kind with no values imposes no
/// restriction and is not stored, so it does not affect equality or encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CacheKey {
    query: String,
    filters: BTreeMap<FilterKind, BTreeSet<String>>,
    fuzzy: bool,
}

#[derive(Serialize)]
struct EncodedKey<'a> {
    q: &'a str,
    f: &'a BTreeMap<FilterKind, BTreeSet<String>>,
    z: bool,
}

impl CacheKey {
    /// Create a key for a plain query with no filters
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: BTreeMap::new(),
            fuzzy: false,
        }
    }

    /// Add values for a filter kind, merging with any already present
    pub fn with_filter<I, S>(mut self, kind: FilterKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.filters.entry(kind).or_default().extend(values);
        }
        self
    }

    /// Enable or disable fuzzy matching
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fuzzy(&self) -> bool {
        self.fuzzy
    }

    /// Values for a filter kind, if the query restricts it
    pub fn filter(&self, kind: FilterKind) -> Option<&BTreeSet<String>> {
        self.filters.get(&kind)
    }

    /// All active filters, ordered by kind
    pub fn filters(&self) -> impl Iterator<Item = (FilterKind, &BTreeSet<String>)> {
        self.filters.iter().map(|(kind, values)| (*kind, values))
    }

    /// Encode the key as compact JSON: `{"q":..,"f":{..},"z":..}`
    ///
    /// Filter names and values come out sorted, so the encoding depends only
    /// on the key's contents.
    pub fn encode(&self) -> String {
        let encoded = EncodedKey {
            q: &self.query,
            f: &self.filters,
            z: self.fuzzy,
        };

        serde_json::to_string(&encoded).unwrap_or_else(|_| {
            format!("{:?}|{:?}|{}", self.query, self.filters, self.fuzzy)
        })
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
