use crate::models::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Number of comments per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl FromIterator<SentimentLabel> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(labels: I) -> Self {
        let mut distribution = Self::default();
        for label in labels {
            distribution.record(label);
        }
        distribution
    }
}
