use crate::constants::{
    CONFIDENCE_BASE, CONFIDENCE_LIMIT, CONFIDENCE_STEP, POLARITY_BASE, POLARITY_LIMIT,
    POLARITY_STEP, SCORE_DECIMAL_PLACES,
};
use crate::models::{Lexicon, SentimentLabel, SentimentResult};
use crate::types::TokenRef;
use crate::utils::round_to_decimals;
use log::debug;

/// Lexicon-based polarity scorer.
///
/// The scorer holds no mutable state, so a single instance can be shared by
/// reference across threads.
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Scores `text`. `None` and the empty string yield a neutral result with
    /// zero confidence.
    pub fn analyze(&self, text: Option<&TokenRef>) -> SentimentResult {
        match text {
            Some(text) if !text.is_empty() => self.analyze_text(text),
            _ => SentimentResult::empty(),
        }
    }

    pub fn analyze_text(&self, text: &TokenRef) -> SentimentResult {
        if text.is_empty() {
            return SentimentResult::empty();
        }

        let (pos_count, neg_count) = self.match_counts(text);
        debug!(
            "Lexicon matches: {} positive, {} negative",
            pos_count, neg_count
        );

        let margin = pos_count.abs_diff(neg_count) as f64;

        let (label, polarity) = if pos_count > neg_count {
            (
                SentimentLabel::Positive,
                POLARITY_LIMIT.min(POLARITY_BASE + margin * POLARITY_STEP),
            )
        } else if neg_count > pos_count {
            (
                SentimentLabel::Negative,
                (-POLARITY_LIMIT).max(-POLARITY_BASE - margin * POLARITY_STEP),
            )
        } else {
            (SentimentLabel::Neutral, 0.0)
        };

        let confidence = CONFIDENCE_LIMIT.min(CONFIDENCE_BASE + margin * CONFIDENCE_STEP);

        SentimentResult {
            label,
            confidence: round_to_decimals(confidence, SCORE_DECIMAL_PLACES),
            polarity: round_to_decimals(polarity, SCORE_DECIMAL_PLACES),
        }
    }

    /// Number of distinct positive and negative lexicon terms found in `text`.
    pub fn match_counts(&self, text: &TokenRef) -> (usize, usize) {
        self.lexicon.count_matches(&text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_term_counts_once() {
        let scorer = SentimentScorer::default();
        assert_eq!(scorer.match_counts("good good good"), (1, 0));
    }

    #[test]
    fn test_substring_matching() {
        let scorer = SentimentScorer::default();
        // "badly" contains "bad", "issues" contains "issue"
        assert_eq!(scorer.match_counts("It went badly, many issues"), (0, 2));
    }
}
