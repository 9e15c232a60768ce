use crate::config::DEFAULT_SUMMARIZER_CONFIG;
use crate::constants::{NO_TEXT_SUMMARY, SENTENCE_DELIMITER, SUMMARY_SENTENCE_SEPARATOR};
use crate::models::{ScoredSentence, StopWords, Tokenizer};
use crate::types::{SentenceScore, TermFrequencyMap, Token, TokenRef};
use crate::utils::{count_term_frequencies, sort_scored_sentences};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Sentence count used by `summarize_default`.
    pub max_sentences: usize,
    /// Sentences at or below this many characters (after trimming) are dropped.
    pub min_sentence_chars: usize,
    /// Tokens at or below this many characters are left out of the frequency table.
    pub min_token_chars: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        *DEFAULT_SUMMARIZER_CONFIG
    }
}

/// Frequency-driven extractive summarizer.
///
/// Sentences are scored by the corpus-wide frequency of their content words;
/// the best `max_sentences` are returned in their original order.
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    stop_words: StopWords,
    config: SummarizerConfig,
}

impl ExtractiveSummarizer {
    pub fn new(stop_words: StopWords, config: SummarizerConfig) -> Self {
        Self { stop_words, config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn summarize_default(&self, text: Option<&TokenRef>) -> String {
        self.summarize(text, self.config.max_sentences)
    }

    /// Summarizes `text` down to at most `max_sentences` sentences.
    ///
    /// - Missing or empty text yields `NO_TEXT_SUMMARY`.
    /// - `max_sentences == 0` yields an empty summary.
    /// - When no more than `max_sentences` sentences survive splitting, the
    ///   input is returned unchanged.
    pub fn summarize(&self, text: Option<&TokenRef>, max_sentences: usize) -> String {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return NO_TEXT_SUMMARY.to_string(),
        };

        if max_sentences == 0 {
            return String::new();
        }

        let sentences = self.tokenizer().split_sentences(text);
        if sentences.len() <= max_sentences {
            debug!(
                "{} sentence(s) within limit of {}; returning input as-is",
                sentences.len(),
                max_sentences
            );
            return text.to_string();
        }

        info!(
            "Ranking {} sentences for a {}-sentence summary...",
            sentences.len(),
            max_sentences
        );
        let mut selected = self.rank_sentences(&sentences);
        selected.truncate(max_sentences);

        // Restore document order
        selected.sort_by_key(|scored_sentence| scored_sentence.original_index);

        let mut summary = selected
            .iter()
            .map(|scored_sentence| scored_sentence.text)
            .collect::<Vec<_>>()
            .join(SUMMARY_SENTENCE_SEPARATOR);
        summary.push(SENTENCE_DELIMITER);

        summary
    }

    /// Scores every sentence and returns them best-first, earlier sentences
    /// winning ties.
    pub fn rank_sentences<'a>(&self, sentences: &[&'a TokenRef]) -> Vec<ScoredSentence<'a>> {
        let tokenizer = self.tokenizer();
        let sentence_tokens: Vec<Vec<Token>> = sentences
            .iter()
            .map(|sentence| tokenizer.tokenize(sentence))
            .collect();

        let term_frequencies = count_term_frequencies(&sentence_tokens, |token| {
            !self.stop_words.contains(token)
                && token.chars().count() > self.config.min_token_chars
        });
        debug!("Frequency table holds {} terms", term_frequencies.len());

        let mut scored_sentences: Vec<ScoredSentence<'a>> = sentences
            .iter()
            .copied()
            .zip(&sentence_tokens)
            .enumerate()
            .map(|(original_index, (text, tokens))| ScoredSentence {
                score: self.score_tokens(tokens, &term_frequencies),
                original_index,
                text,
            })
            .collect();

        sort_scored_sentences(&mut scored_sentences);

        scored_sentences
    }

    fn score_tokens(
        &self,
        tokens: &[Token],
        term_frequencies: &TermFrequencyMap,
    ) -> SentenceScore {
        tokens
            .iter()
            .filter(|token| !self.stop_words.contains(token))
            .filter_map(|token| term_frequencies.get(token))
            .sum()
    }

    fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.config.min_sentence_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_score_nothing() {
        let summarizer = ExtractiveSummarizer::default();
        let sentences = vec![
            "the cat sat on the mat all day long",
            "policy policy policy is what matters most",
        ];
        let ranked = summarizer.rank_sentences(&sentences);

        // "cat", "sat", "mat", "all", "day" are too short for the table
        let first = &ranked[0];
        assert_eq!(first.original_index, 1);
        assert!(ranked[1].score < first.score);
    }
}
