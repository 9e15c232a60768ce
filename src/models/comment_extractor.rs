use crate::config::DEFAULT_COMMENT_EXTRACTOR_CONFIG;
use crate::constants::COMMENT_ID_COLUMN;
use crate::models::Comment;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use std::io::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentExtractorConfig {
    /// A column whose lower-cased header contains any of these holds the comment text.
    pub text_column_keywords: &'static [&'static str],
    /// Fallback cells must be longer than this many characters.
    pub min_fallback_chars: usize,
    /// Comments at or below this many characters are skipped.
    pub min_comment_chars: usize,
    /// Display previews are cut to this many characters.
    pub preview_max_chars: usize,
}

impl Default for CommentExtractorConfig {
    fn default() -> Self {
        *DEFAULT_COMMENT_EXTRACTOR_CONFIG
    }
}

/// Pulls comment text out of CSV exports whose layout is not known up front.
#[derive(Debug, Clone, Default)]
pub struct CommentExtractor {
    config: CommentExtractorConfig,
}

impl CommentExtractor {
    pub fn new(config: CommentExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CommentExtractorConfig {
        &self.config
    }

    pub fn extract_from_bytes(&self, bytes: Vec<u8>) -> Result<Vec<Comment>, Error> {
        let csv = String::from_utf8(bytes)?;

        self.extract_from_csv_str(&csv)
    }

    /// Reads every data row of `csv` and keeps the ones carrying a usable comment.
    ///
    /// The comment text comes from the first column whose header mentions one
    /// of the configured keywords. When that cell is empty (or there is no
    /// such column) the first cell longer than `min_fallback_chars` is used.
    pub fn extract_from_csv_str(&self, csv: &str) -> Result<Vec<Comment>, Error> {
        let csv = csv.trim();
        let line_count = csv.lines().count();
        if line_count < 2 {
            return Err(Error::InsufficientRows(line_count));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let text_column = self.find_text_column(&headers);
        let id_column = headers.iter().position(|h| h == COMMENT_ID_COLUMN);
        match text_column {
            Some(idx) => debug!("Using column {:?} for comment text", &headers[idx]),
            None => debug!("No comment column found; falling back to longest-looking cell"),
        }

        let mut comments = Vec::new();

        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let row_number = row_idx + 1;

            let text = match self.comment_text(&record, text_column) {
                Some(text) => text,
                None => {
                    debug!("Row {} has no comment text", row_number);
                    continue;
                }
            };

            let id = id_column
                .and_then(|idx| record.get(idx))
                .map_or_else(|| row_number.to_string(), |id| id.to_string());

            comments.push(Comment::new(id, text));
        }

        if comments.is_empty() {
            warn!("No usable comments in {} data line(s)", line_count - 1);
            return Err(Error::NoComments);
        }

        info!("Extracted {} comments", comments.len());

        Ok(comments)
    }

    fn find_text_column(&self, headers: &StringRecord) -> Option<usize> {
        headers.iter().position(|header| {
            let header = header.to_lowercase();
            self.config
                .text_column_keywords
                .iter()
                .any(|keyword| header.contains(keyword))
        })
    }

    fn comment_text(&self, record: &StringRecord, text_column: Option<usize>) -> Option<String> {
        let text = text_column
            .and_then(|idx| record.get(idx))
            .filter(|cell| !cell.is_empty())
            .or_else(|| {
                record
                    .iter()
                    .find(|cell| cell.trim().chars().count() > self.config.min_fallback_chars)
            })?
            .trim();

        if text.chars().count() > self.config.min_comment_chars {
            Some(text.to_string())
        } else {
            None
        }
    }
}
