mod config;
pub use config::{DEFAULT_COMMENT_EXTRACTOR_CONFIG, DEFAULT_SUMMARIZER_CONFIG};
mod constants;
pub use constants::{DEFAULT_NEGATIVE_TERMS, DEFAULT_POSITIVE_TERMS, NO_TEXT_SUMMARY, STOP_WORDS};
pub mod models;
pub use models::{
    AnalysisReport, Comment, CommentAnalyzer, CommentExtractor, CommentExtractorConfig,
    CommentSentiment, Error, ExtractiveSummarizer, Lexicon, ScoredSentence,
    SentimentDistribution, SentimentLabel, SentimentResult, SentimentScorer, StopWords,
    SummarizerConfig, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{CommentId, SentenceIndex, SentenceScore, Term, Token, TokenRef};
pub use utils::read_input_file;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Scores a single text with the built-in lexicon.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    SentimentScorer::default().analyze_text(text)
}

/// Summarizes `text` with the built-in stop words, keeping at most
/// `max_sentences` sentences.
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    ExtractiveSummarizer::default().summarize(Some(text), max_sentences)
}

/// Extracts comments from CSV text and produces the full report using the
/// default lexicon, stop words and thresholds.
pub fn analyze_csv(csv: &str) -> Result<AnalysisReport, Error> {
    let comment_extractor = CommentExtractor::default();
    let comment_analyzer = CommentAnalyzer::default();

    analyze_csv_with_custom_config(&comment_extractor, &comment_analyzer, csv)
}

pub fn analyze_csv_with_custom_config(
    comment_extractor: &CommentExtractor,
    comment_analyzer: &CommentAnalyzer,
    csv: &str,
) -> Result<AnalysisReport, Error> {
    let comments = comment_extractor.extract_from_csv_str(csv)?;

    comment_analyzer.analyze_comments(&comments)
}
