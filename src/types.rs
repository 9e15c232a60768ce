use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lower-cased runs of word characters.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A single lexicon entry (e.g. `"excellent"`), always stored lower-cased.
pub type Term = String;

/// Position of a sentence within the list of sentences that survived splitting.
pub type SentenceIndex = usize;

/// Sum of term-frequency values for the tokens of a sentence.
pub type SentenceScore = usize;

/// Represents the number of occurrences of a token across the summarized corpus.
pub type TermFrequency = usize;

/// Represents a map of tokens to their frequency counts across the summarized corpus.
/// The key is the `Token`, and the value is the `TermFrequency`.
pub type TermFrequencyMap = HashMap<Token, TermFrequency>;

/// Identifier of a comment, taken from an `id` column when present, otherwise the 1-based row number.
pub type CommentId = String;
