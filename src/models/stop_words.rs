use crate::constants::STOP_WORDS;
use crate::types::TokenRef;
use std::collections::HashSet;

/// Function words that never contribute to sentence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_list(STOP_WORDS)
    }
}

impl StopWords {
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words
                .iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Expects an already lower-cased token.
    pub fn contains(&self, token: &TokenRef) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
