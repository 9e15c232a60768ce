#![allow(dead_code)] // Not every test binary uses every helper

pub mod constants;

use comment_sentiment::ExtractiveSummarizer;
use std::fs;
use std::path::{Path, PathBuf};

use constants::TEST_DATA_FILES_DIRECTORY;

/// Path of a fixture under `tests/test_data_files`.
pub fn test_data_file(file_name: &str) -> PathBuf {
    Path::new(TEST_DATA_FILES_DIRECTORY).join(file_name)
}

pub fn read_test_data_file(file_name: &str) -> String {
    fs::read_to_string(test_data_file(file_name)).expect("Failed to read test data file")
}

/// A summarizer fixture: directive lines plus the corpus text.
pub struct SummaryFixture {
    pub max_sentences: usize,
    pub expected_sentences: Vec<String>,
    pub expect_unchanged: bool,
    pub corpus: String,
}

// Helper function to parse the directives out of a summary fixture
pub fn load_summary_fixture(file_path: &Path) -> SummaryFixture {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let max_sentences = content
        .lines()
        .find_map(|line| line.trim().strip_prefix("MAX_SENTENCES:"))
        .map(|value| value.trim().parse().expect("Invalid MAX_SENTENCES value"))
        .expect("Missing MAX_SENTENCES line");

    let expected_sentences = content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("EXPECTED:"))
        .map(|sentence| sentence.trim().to_string())
        .collect();

    let expect_unchanged = content
        .lines()
        .any(|line| line.trim() == "EXPECTED_UNCHANGED");

    // Filter out lines starting with 'MAX_SENTENCES:', 'EXPECTED', or 'COMMENT:'
    let corpus = content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with("MAX_SENTENCES:")
                && !line.starts_with("EXPECTED")
                && !line.starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n");

    SummaryFixture {
        max_sentences,
        expected_sentences,
        expect_unchanged,
        corpus,
    }
}

// Helper function to run the summarizer against a fixture file
pub fn run_test_for_file(test_file_path: &Path, summarizer: &ExtractiveSummarizer) {
    let fixture = load_summary_fixture(test_file_path);

    eprintln!("Testing file: {:?}", test_file_path);

    let summary = summarizer.summarize(Some(fixture.corpus.as_str()), fixture.max_sentences);

    if fixture.expect_unchanged {
        assert_eq!(
            summary, fixture.corpus,
            "Expected unchanged corpus for {:?}",
            test_file_path
        );
        return;
    }

    let expected_summary = format!("{}.", fixture.expected_sentences.join(". "));

    assert_eq!(
        summary, expected_summary,
        "Summary mismatch for {:?}",
        test_file_path
    );
}
