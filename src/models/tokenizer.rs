use crate::constants::SENTENCE_DELIMITER;
use crate::types::{Token, TokenRef};

/// Splits text into sentences and sentences into word tokens.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    min_sentence_chars: usize,
}

impl Tokenizer {
    /// Sentences whose trimmed length is at most `min_sentence_chars`
    /// characters are discarded by `split_sentences`.
    pub fn new(min_sentence_chars: usize) -> Self {
        Self { min_sentence_chars }
    }

    /// Splits on every `.` and keeps the trimmed pieces longer than the
    /// configured minimum.
    ///
    /// Abbreviations, decimal numbers and quoted periods are not special-cased.
    pub fn split_sentences<'a>(&self, text: &'a TokenRef) -> Vec<&'a TokenRef> {
        text.split(SENTENCE_DELIMITER)
            .map(|piece| piece.trim())
            .filter(|piece| piece.chars().count() > self.min_sentence_chars)
            .collect()
    }

    /// Lower-cased runs of word characters (alphanumerics and `_`).
    pub fn tokenize(&self, text: &TokenRef) -> Vec<Token> {
        text.to_lowercase()
            .split(|c: char| !Self::is_word_char(c))
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}
