use crate::models::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Outcome of scoring a single text.
///
/// `polarity` is in `[-0.8, 0.8]` and its sign always agrees with `label`;
/// `confidence` is in `[0.0, 1.0]`. Both are rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub confidence: f64,
    pub polarity: f64,
}

impl SentimentResult {
    /// Result for missing or empty text.
    pub fn empty() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            polarity: 0.0,
        }
    }
}
