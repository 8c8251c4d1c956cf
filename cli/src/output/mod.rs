//! Terminal formatting for search results, suggestions and cache stats

use balti_core::{CacheStats, DictionaryEntry, SearchSuggestion};

/// Format one dictionary entry as a single line
pub fn format_entry(entry: &DictionaryEntry) -> String {
    let mut line = format!("{} - {}", entry.word, entry.translation);

    let details: Vec<&str> = [
        entry.category.as_deref(),
        entry.dialect.as_deref(),
        entry.difficulty.as_deref(),
    ]
    .into_iter()
    .flatten()
    .chain(entry.tags.iter().map(String::as_str))
    .collect();

    if !details.is_empty() {
        line.push_str(&format!(" [{}]", details.join(", ")));
    }

    line
}

/// Print search results
pub fn print_entries(entries: &[DictionaryEntry], cache_hit: bool) {
    let origin = if cache_hit { "cached" } else { "fresh" };

    if entries.is_empty() {
        println!("🔍 No matches ({})", origin);
        return;
    }

    println!("🔍 {} match(es) ({})", entries.len(), origin);
    for entry in entries {
        println!("  📖 {}", format_entry(entry));
    }
}

/// Print suggestions
pub fn print_suggestions(suggestions: &[&SearchSuggestion]) {
    if suggestions.is_empty() {
        println!("💡 No suggestions");
        return;
    }

    for suggestion in suggestions {
        let icon = suggestion.icon.unwrap_or("•");
        match suggestion.hint {
            Some(hint) => println!("  {} {} ({})", icon, suggestion.text, hint),
            None => println!("  {} {}", icon, suggestion.text),
        }
    }
}

/// Print cache statistics
pub fn print_stats(stats: &CacheStats) {
    println!("📊 Cached queries: {}", stats.size);
    for entry in &stats.entries {
        println!("  {:>8.1}s  {}", entry.age.as_secs_f64(), entry.key);
    }
}
