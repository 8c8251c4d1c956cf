//! Fuzzy filtering over collections

use super::entry::SearchableEntry;
use super::scorer::fuzzy_score;

/// Default minimum score for an item to be kept
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Keep the items whose text fuzzy-matches `query`, best matches first
///
/// An empty query returns `items` untouched. Otherwise each item is scored
/// once against `extract_text(item)`, items below `threshold` are dropped and
/// the rest are sorted by descending score. Equal scores keep their input order.
pub fn fuzzy_filter<T, F>(items: Vec<T>, query: &str, extract_text: F, threshold: f64) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    rank_by(items, query, threshold, |item| {
        fuzzy_score(query, extract_text(item))
    })
}

/// Fuzzy filter for dictionary entries, matching on either text field
///
/// An entry's score is the better of its primary and secondary field scores.
pub fn fuzzy_filter_entries<E>(items: Vec<E>, query: &str, threshold: f64) -> Vec<E>
where
    E: SearchableEntry,
{
    rank_by(items, query, threshold, |entry| entry_score(query, entry))
}

/// Best fuzzy score of `query` against either text field of `entry`
pub fn entry_score<E: SearchableEntry>(query: &str, entry: &E) -> f64 {
    fuzzy_score(query, entry.primary_text()).max(fuzzy_score(query, entry.secondary_text()))
}

fn rank_by<T, S>(items: Vec<T>, query: &str, threshold: f64, score: S) -> Vec<T>
where
    S: Fn(&T) -> f64,
{
    if query.is_empty() {
        return items;
    }

    let mut scored: Vec<(f64, T)> = items
        .into_iter()
        .map(|item| (score(&item), item))
        .filter(|(score, _)| *score >= threshold)
        .collect();

    // `sort_by` is stable, so ties stay in input order
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::entry::DictionaryEntry;

    #[test]
    fn test_empty_query_is_identity() {
        let items = vec!["xyz", "tea", "sea"];
        let result = fuzzy_filter(items.clone(), "", |s| *s, DEFAULT_THRESHOLD);
        assert_eq!(result, items);
    }

    #[test]
    fn test_empty_items() {
        let result = fuzzy_filter(Vec::<&str>::new(), "tea", |s| *s, DEFAULT_THRESHOLD);
        assert!(result.is_empty());
    }

    #[test]
    fn test_threshold_exclusion_and_order() {
        let items = vec!["xyz", "sea", "tea"];
        let result = fuzzy_filter(items, "tea", |s| *s, 0.6);
        assert_eq!(result, vec!["tea", "sea"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec!["sea", "pea", "tea", "ten"];
        let result = fuzzy_filter(items, "tea", |s| *s, 0.6);
        assert_eq!(result, vec!["tea", "sea", "pea", "ten"]);
    }

    #[test]
    fn test_entries_match_on_either_field() {
        let entries = vec![
            DictionaryEntry::new("ri", "mountain"),
            DictionaryEntry::new("chu", "water"),
            DictionaryEntry::new("kha", "snow"),
        ];

        let by_word = fuzzy_filter_entries(entries.clone(), "chu", DEFAULT_THRESHOLD);
        assert_eq!(by_word.len(), 1);
        assert_eq!(by_word[0].word, "chu");

        let by_translation = fuzzy_filter_entries(entries, "mountian", DEFAULT_THRESHOLD);
        assert_eq!(by_translation.len(), 1);
        assert_eq!(by_translation[0].word, "ri");
    }
}
