//! Static search suggestions for empty-query UX
//!
//! Suggestions are reference data fixed at compile time. Nothing here shares
//! mutable state; the random helpers take the RNG as an argument or use the
//! thread-local one.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Number of suggestions shown for a blank input
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// A word offered to the user before they type a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSuggestion {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

const fn suggestion(
    text: &'static str,
    category: &'static str,
    hint: &'static str,
    icon: &'static str,
) -> SearchSuggestion {
    SearchSuggestion {
        text,
        category: Some(category),
        hint: Some(hint),
        icon: Some(icon),
    }
}

/// Built-in suggestion pool
pub const SUGGESTIONS: &[SearchSuggestion] = &[
    suggestion("ju", "Greetings", "hello, goodbye", "👋"),
    suggestion("khamzang", "Greetings", "are you well?", "🙂"),
    suggestion("chu", "Nature", "water", "💧"),
    suggestion("ri", "Nature", "mountain", "🏔️"),
    suggestion("kha", "Nature", "snow", "❄️"),
    suggestion("nyima", "Nature", "sun", "☀️"),
    suggestion("zla", "Nature", "moon", "🌙"),
    suggestion("momo", "Food", "steamed dumpling", "🥟"),
    suggestion("cha", "Food", "tea", "🍵"),
    suggestion("marzan", "Food", "barley porridge", "🥣"),
    suggestion("kisir", "Food", "buckwheat bread", "🫓"),
    suggestion("ama", "Family", "mother", "👩"),
    suggestion("ata", "Family", "father", "👨"),
    suggestion("chik", "Numbers", "one", "1️⃣"),
    suggestion("nyis", "Numbers", "two", "2️⃣"),
    suggestion("sum", "Numbers", "three", "3️⃣"),
];

/// Sample up to `count` distinct suggestions
pub fn random_suggestions(count: usize, pool: &[SearchSuggestion]) -> Vec<&SearchSuggestion> {
    random_suggestions_with(count, pool, &mut rand::thread_rng())
}

/// Sample up to `count` distinct suggestions using the given RNG
pub fn random_suggestions_with<'a, R>(
    count: usize,
    pool: &'a [SearchSuggestion],
    rng: &mut R,
) -> Vec<&'a SearchSuggestion>
where
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, count).collect()
}

/// Suggestions whose category matches, ignoring case
pub fn by_category<'a>(category: &str, pool: &'a [SearchSuggestion]) -> Vec<&'a SearchSuggestion> {
    let category = category.to_lowercase();
    pool.iter()
        .filter(|s| s.category.is_some_and(|c| c.to_lowercase() == category))
        .collect()
}

/// Suggestions for what the user has typed so far
///
/// A blank (empty or whitespace-only) input yields a random sample.
/// Otherwise every suggestion whose text, category or hint contains the input
/// as typed, surrounding whitespace included, is returned in pool order.
/// Case is ignored.
pub fn filter_by_input<'a>(input: &str, pool: &'a [SearchSuggestion]) -> Vec<&'a SearchSuggestion> {
    filter_by_input_with(input, pool, &mut rand::thread_rng())
}

/// [`filter_by_input`] with an explicit RNG for the blank-input sample
pub fn filter_by_input_with<'a, R>(
    input: &str,
    pool: &'a [SearchSuggestion],
    rng: &mut R,
) -> Vec<&'a SearchSuggestion>
where
    R: Rng + ?Sized,
{
    if input.trim().is_empty() {
        return random_suggestions_with(DEFAULT_SUGGESTION_COUNT, pool, rng);
    }

    let input = input.to_lowercase();
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&input));

    pool.iter()
        .filter(|s| contains(Some(s.text)) || contains(s.category) || contains(s.hint))
        .collect()
}
