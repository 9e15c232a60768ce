use crate::types::{SentenceIndex, SentenceScore};

/// A candidate summary sentence together with its score and its position in
/// the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub score: SentenceScore,
    pub original_index: SentenceIndex,
    pub text: &'a str,
}
