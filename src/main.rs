use clap::Parser;
use comment_sentiment::{
    read_input_file, CommentAnalyzer, CommentExtractor, Error, ExtractiveSummarizer, Lexicon,
    SentimentScorer, StopWords, SummarizerConfig, DEFAULT_COMMENT_EXTRACTOR_CONFIG,
};
use log::{error, info};
use std::io::{self, Read};
use std::path::PathBuf;

/// Score the sentiment of every comment in a CSV export and summarize them.
///
/// Reads CSV from FILE (gzip-compressed when it ends in `.gz`) or from stdin
/// and prints a JSON report.
#[derive(Parser, Debug)]
#[command(name = "comment-sentiment-cli")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// CSV file to analyze; stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of sentences in the summary
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    max_sentences: u32,

    /// CSV lexicon with `Term` and `Polarity` columns, replacing the built-in word lists
    #[arg(short, long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Print only the summary text
    #[arg(long)]
    summary_only: bool,

    /// Print the report as single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let lexicon = match &cli.lexicon {
        Some(path) => {
            info!("Loading lexicon from {:?}", path);
            Lexicon::from_csv_str(&String::from_utf8(read_input_file(path)?)?)?
        }
        None => Lexicon::default(),
    };

    let summarizer_config = SummarizerConfig {
        max_sentences: cli.max_sentences as usize,
        ..SummarizerConfig::default()
    };

    let comment_extractor = CommentExtractor::default();
    let comment_analyzer = CommentAnalyzer::new(
        SentimentScorer::new(lexicon),
        ExtractiveSummarizer::new(StopWords::default(), summarizer_config),
        DEFAULT_COMMENT_EXTRACTOR_CONFIG,
    );

    let input = match &cli.file {
        Some(path) => read_input_file(path)?,
        None => {
            let mut input = Vec::new();
            io::stdin().read_to_end(&mut input)?;
            input
        }
    };

    let comments = comment_extractor.extract_from_bytes(input)?;
    let report = comment_analyzer.analyze_comments(&comments)?;

    if cli.summary_only {
        println!("{}", report.summary);
    } else if cli.compact {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_json_pretty()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_sentences_is_rejected() {
        assert!(Cli::try_parse_from(["comment-sentiment-cli", "-n", "0"]).is_err());

        let cli = Cli::try_parse_from(["comment-sentiment-cli", "-n", "2"]).unwrap();
        assert_eq!(cli.max_sentences, 2);
    }

    #[test]
    fn test_defaults_read_stdin_with_three_sentences() {
        let cli = Cli::try_parse_from(["comment-sentiment-cli"]).unwrap();

        assert!(cli.file.is_none());
        assert_eq!(cli.max_sentences, 3);
        assert!(!cli.summary_only);
    }
}
