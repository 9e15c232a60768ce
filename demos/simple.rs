use comment_sentiment::{analyze_sentiment, summarize_text};

fn main() {
    env_logger::init();

    let text = "The proposal is great and the consultation was effective";

    let result = analyze_sentiment(text);

    println!("Sentiment for the given text \"{}\"", text);
    println!(
        "{}: confidence {:.2}, polarity {:.2}",
        result.label, result.confidence, result.polarity
    );

    let corpus = "The new zoning rules will help local businesses grow steadily. \
        Parking near the market remains a serious concern for residents. \
        Local businesses expect the zoning rules to bring more customers. \
        Some residents asked for longer consultation periods next year. \
        The zoning rules should be reviewed again after the first year.";

    println!("\nSummary:\n{}", summarize_text(corpus, 2));
}
