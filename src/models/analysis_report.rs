use crate::models::{SentimentDistribution, SentimentLabel};
use crate::types::CommentId;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Per-comment row of an `AnalysisReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSentiment {
    pub id: CommentId,
    /// Display preview of the comment, not the full text.
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub polarity: f64,
}

/// Sentiment and summary for a whole batch of comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sentiment_results: Vec<CommentSentiment>,
    pub summary: String,
    pub sentiment_distribution: SentimentDistribution,
    pub average_polarity: f64,
    pub total_comments: usize,
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
