pub mod analysis_report;
pub use analysis_report::{AnalysisReport, CommentSentiment};

pub mod comment;
pub use comment::Comment;

pub mod comment_analyzer;
pub use comment_analyzer::CommentAnalyzer;

pub mod comment_extractor;
pub use comment_extractor::{CommentExtractor, CommentExtractorConfig};

pub mod error;
pub use error::Error;

pub mod extractive_summarizer;
pub use extractive_summarizer::{ExtractiveSummarizer, SummarizerConfig};

pub mod lexicon;
pub use lexicon::Lexicon;

pub mod scored_sentence;
pub use scored_sentence::ScoredSentence;

pub mod sentiment_distribution;
pub use sentiment_distribution::SentimentDistribution;

pub mod sentiment_label;
pub use sentiment_label::SentimentLabel;

pub mod sentiment_result;
pub use sentiment_result::SentimentResult;

pub mod sentiment_scorer;
pub use sentiment_scorer::SentimentScorer;

pub mod stop_words;
pub use stop_words::StopWords;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
