//! Edit-distance scoring

/// Levenshtein distance between `a` and `b`
///
/// Counts the minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`. Comparison is case-sensitive and works
/// on `char`s; callers normalize case before calling.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // table[i][j] = distance between b[..i] and a[..j]
    let mut table = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            let cost = if b[i - 1] == a[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j - 1] + cost)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j] + 1);
        }
    }

    table[b.len()][a.len()]
}

/// Normalized, case-insensitive similarity between a query and a candidate
///
/// Returns `1 - distance / max_len`, clamped to `[0.0, 1.0]`, where
/// `max_len` is the longer input's char count before lower-casing. Two empty
/// strings score 1.0; an empty string against a non-empty one scores 0.0.
pub fn fuzzy_score(query: &str, candidate: &str) -> f64 {
    let max_len = query.chars().count().max(candidate.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    let score = 1.0 - distance(&query, &candidate) as f64 / max_len as f64;
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identity() {
        for s in ["", "chu", "mountain", "ཆུ"] {
            assert_eq!(distance(s, s), 0);
            assert_eq!(fuzzy_score(s, s), 1.0);
        }
    }

    #[test]
    fn test_distance_known_values() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("tea", "sea"), 1);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_distance_symmetry() {
        let pairs = [("kitten", "sitting"), ("chu", "water"), ("", "ri"), ("momo", "mom")];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_distance_is_case_sensitive() {
        assert_eq!(distance("Tea", "tea"), 1);
        assert_eq!(fuzzy_score("Tea", "tea"), 1.0);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(distance("ཆུ", "ཆ"), 1);
    }

    #[test]
    fn test_score_uses_original_lengths() {
        // 'İ' lower-cases to two chars: "i" plus a combining dot
        assert_eq!("İ".to_lowercase().chars().count(), 2);
        assert_eq!(fuzzy_score("İ", "i"), 0.0);
        assert_eq!(fuzzy_score("İx", "ix"), 0.5);
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(fuzzy_score("", ""), 1.0);
        assert_eq!(fuzzy_score("", "chu"), 0.0);
        assert_eq!(fuzzy_score("abc", "xyz"), 0.0);

        let score = fuzzy_score("tea", "sea");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);

        for (a, b) in [("a", "abcdef"), ("mountain", "ri"), ("water", "wader")] {
            let score = fuzzy_score(a, b);
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
