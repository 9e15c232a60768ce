use crate::config::DEFAULT_COMMENT_EXTRACTOR_CONFIG;
use crate::constants::SCORE_DECIMAL_PLACES;
use crate::models::{
    AnalysisReport, Comment, CommentExtractorConfig, CommentSentiment, ExtractiveSummarizer,
    SentimentDistribution, SentimentScorer,
};
use crate::utils::{round_to_decimals, truncate_preview};
use crate::Error;
use log::info;

/// Scores every comment of a batch and summarizes the batch as a whole.
///
/// Built once at startup and shared by reference; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct CommentAnalyzer {
    scorer: SentimentScorer,
    summarizer: ExtractiveSummarizer,
    preview_max_chars: usize,
}

impl Default for CommentAnalyzer {
    fn default() -> Self {
        Self::new(
            SentimentScorer::default(),
            ExtractiveSummarizer::default(),
            DEFAULT_COMMENT_EXTRACTOR_CONFIG,
        )
    }
}

impl CommentAnalyzer {
    pub fn new(
        scorer: SentimentScorer,
        summarizer: ExtractiveSummarizer,
        extractor_config: &CommentExtractorConfig,
    ) -> Self {
        Self {
            scorer,
            summarizer,
            preview_max_chars: extractor_config.preview_max_chars,
        }
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    pub fn summarizer(&self) -> &ExtractiveSummarizer {
        &self.summarizer
    }

    pub fn analyze_comments(&self, comments: &[Comment]) -> Result<AnalysisReport, Error> {
        if comments.is_empty() {
            return Err(Error::NoComments);
        }

        info!("Scoring {} comments...", comments.len());
        let sentiment_results: Vec<CommentSentiment> = comments
            .iter()
            .map(|comment| {
                let result = self.scorer.analyze_text(&comment.text);

                CommentSentiment {
                    id: comment.id.clone(),
                    text: truncate_preview(&comment.text, self.preview_max_chars),
                    sentiment: result.label,
                    confidence: result.confidence,
                    polarity: result.polarity,
                }
            })
            .collect();

        info!("Summarizing...");
        let corpus = comments
            .iter()
            .map(|comment| comment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let summary = self.summarizer.summarize_default(Some(corpus.as_str()));

        let sentiment_distribution: SentimentDistribution = sentiment_results
            .iter()
            .map(|result| result.sentiment)
            .collect();

        let total_polarity: f64 = sentiment_results.iter().map(|result| result.polarity).sum();
        let average_polarity = round_to_decimals(
            total_polarity / sentiment_results.len() as f64,
            SCORE_DECIMAL_PLACES,
        );

        Ok(AnalysisReport {
            total_comments: sentiment_results.len(),
            sentiment_results,
            summary,
            sentiment_distribution,
            average_polarity,
        })
    }
}
