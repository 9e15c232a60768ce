use comment_sentiment::{analyze_sentiment, Lexicon, SentimentLabel, SentimentScorer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing_text() {
        let scorer = SentimentScorer::default();

        for result in [scorer.analyze(None), scorer.analyze(Some("")), analyze_sentiment("")] {
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert_eq!(result.confidence, 0.0);
            assert_eq!(result.polarity, 0.0);
        }
    }

    #[test]
    fn test_positive_text() {
        let result = analyze_sentiment("This is great and wonderful");

        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.polarity, 0.5);
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn test_negative_text() {
        let result = analyze_sentiment("This is bad and terrible");

        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.polarity, -0.5);
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn test_text_without_lexicon_terms() {
        let result = analyze_sentiment("The sky is blue");

        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_tie_of_non_zero_counts_is_neutral() {
        let result = analyze_sentiment("Good idea, but a bad rollout");

        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_whitespace_and_punctuation_only() {
        for text in ["   ", "...!?", "\n\t"] {
            let result = analyze_sentiment(text);
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert_eq!(result.confidence, 0.5);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = analyze_sentiment("EXCELLENT work, Brilliant outcome");

        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.polarity, 0.5);
    }

    #[test]
    fn test_matching_uses_substrings() {
        // "inadequate" also contains "adequate"; "recommend" also contains "commend"
        let result = analyze_sentiment("The response was inadequate");
        assert_eq!(result.label, SentimentLabel::Neutral);

        let result = analyze_sentiment("I recommend it");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.polarity, 0.5);
    }

    #[test]
    fn test_repeated_terms_count_once() {
        let result = analyze_sentiment("great great great great");

        assert_eq!(result.polarity, 0.4);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_saturated_text_stays_in_range() {
        let positive = "good great excellent positive support agree approve like love amazing \
            wonderful fantastic perfect outstanding brilliant";
        let result = analyze_sentiment(positive);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.polarity, 0.8);
        assert_eq!(result.confidence, 1.0);

        let negative = "terrible awful horrible disgusting worst problem issue concern flawed \
            poor weak deficient";
        let result = analyze_sentiment(negative);
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.polarity, -0.8);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_label_agrees_with_polarity_sign() {
        let texts = [
            "",
            "The sky is blue",
            "good",
            "bad",
            "good but bad and terrible",
            "love love hate",
            "a wonderful, effective and successful plan with one issue",
            "This seems problematic and disappointing",
        ];

        for text in texts {
            let result = analyze_sentiment(text);
            match result.label {
                SentimentLabel::Positive => assert!(result.polarity > 0.0, "{}", text),
                SentimentLabel::Negative => assert!(result.polarity < 0.0, "{}", text),
                SentimentLabel::Neutral => assert_eq!(result.polarity, 0.0, "{}", text),
            }
            assert!((0.0..=1.0).contains(&result.confidence));
            assert!((-0.8..=0.8).contains(&result.polarity));
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let scorer = SentimentScorer::default();
        let text = "Effective plan, but parking is a concern";

        assert_eq!(scorer.analyze_text(text), scorer.analyze_text(text));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::new(vec!["splendid"], vec!["dreadful", "meh"]).unwrap();
        let scorer = SentimentScorer::new(lexicon);

        let result = scorer.analyze_text("Splendid idea but the signage is dreadful and meh");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.polarity, -0.4);
        assert_eq!(result.confidence, 0.6);

        // Built-in terms no longer count
        let result = scorer.analyze_text("This is great");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_result_serializes_with_lowercase_label() {
        let json = serde_json::to_string(&analyze_sentiment("This is great and wonderful")).unwrap();

        assert_eq!(json, r#"{"label":"positive","confidence":0.7,"polarity":0.5}"#);
    }
}
