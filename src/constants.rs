pub const DEFAULT_POSITIVE_TERMS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "support",
    "agree",
    "approve",
    "like",
    "love",
    "amazing",
    "wonderful",
    "fantastic",
    "perfect",
    "outstanding",
    "brilliant",
    "commend",
    "endorse",
    "recommend",
    "beneficial",
    "effective",
    "successful",
    "impressive",
    "satisfactory",
    "adequate",
];

pub const DEFAULT_NEGATIVE_TERMS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "negative",
    "oppose",
    "disagree",
    "disapprove",
    "hate",
    "dislike",
    "horrible",
    "disgusting",
    "worst",
    "fail",
    "problem",
    "issue",
    "concern",
    "flawed",
    "inadequate",
    "insufficient",
    "problematic",
    "disappointing",
    "unsatisfactory",
    "poor",
    "weak",
    "deficient",
];

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "this", "that", "these", "those", "i", "you",
    "he", "she", "it", "we", "they",
];

/// Returned by the summarizer when it is handed no text at all.
pub const NO_TEXT_SUMMARY: &str = "No text provided for summarization.";

pub const SENTENCE_DELIMITER: char = '.';

pub const SUMMARY_SENTENCE_SEPARATOR: &str = ". ";

pub const PREVIEW_ELLIPSIS: &str = "...";

pub const SCORE_DECIMAL_PLACES: i32 = 4;

pub const COMMENT_ID_COLUMN: &str = "id";

// Polarity / confidence shape
pub const POLARITY_BASE: f64 = 0.3;
pub const POLARITY_STEP: f64 = 0.1;
pub const POLARITY_LIMIT: f64 = 0.8;
pub const CONFIDENCE_BASE: f64 = 0.5;
pub const CONFIDENCE_STEP: f64 = 0.1;
pub const CONFIDENCE_LIMIT: f64 = 1.0;
