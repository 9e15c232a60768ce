use crate::models::{CommentExtractorConfig, SummarizerConfig};

pub const DEFAULT_SUMMARIZER_CONFIG: &SummarizerConfig = &SummarizerConfig {
    max_sentences: 3,
    min_sentence_chars: 20,
    min_token_chars: 3,
};

pub const DEFAULT_COMMENT_EXTRACTOR_CONFIG: &CommentExtractorConfig = &CommentExtractorConfig {
    text_column_keywords: &["comment", "text", "feedback", "suggestion", "remarks"],
    min_fallback_chars: 10,
    min_comment_chars: 5,
    preview_max_chars: 200,
};
