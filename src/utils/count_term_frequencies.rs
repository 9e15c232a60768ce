use crate::types::{TermFrequencyMap, Token};

/// Counts how often each token occurs across the given token lists.
///
/// Only tokens accepted by `include` are counted.
///
/// # Example
/// ```ignore
/// let sentences = vec![vec!["budget".to_string(), "plan".to_string()], vec!["budget".to_string()]];
/// let frequencies = count_term_frequencies(&sentences, |_| true);
/// assert_eq!(frequencies.get("budget"), Some(&2));
/// ```
pub fn count_term_frequencies<F>(token_lists: &[Vec<Token>], include: F) -> TermFrequencyMap
where
    F: Fn(&Token) -> bool,
{
    let mut frequencies = TermFrequencyMap::new();

    for token in token_lists.iter().flatten().filter(|token| include(token)) {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_across_lists() {
        let lists = vec![
            tokens(&["budget", "plan", "budget"]),
            tokens(&["plan", "the"]),
        ];
        let frequencies = count_term_frequencies(&lists, |token| token != "the");

        assert_eq!(frequencies.get("budget"), Some(&2));
        assert_eq!(frequencies.get("plan"), Some(&2));
        assert_eq!(frequencies.get("the"), None);
    }
}
