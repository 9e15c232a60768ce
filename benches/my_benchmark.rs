use comment_sentiment::{analyze_csv, ExtractiveSummarizer, SentimentScorer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LONG_TEXT: &str = "The draft policy on urban transport received a wide range of responses. \
    Many residents support the expansion of cycle lanes across the city centre. \
    Several business owners raised a concern about reduced parking near shops. \
    The proposal to extend bus services into the evening was considered beneficial. \
    Some respondents described the consultation period as insufficient for proper review. \
    Cycle lanes were described as effective at reducing congestion in other cities. \
    A number of comments asked for clearer timelines for the transport changes. \
    Residents near the ring road reported a problem with noise from heavy vehicles. \
    The plan to introduce low emission zones drew both praise and criticism. \
    Overall the transport policy was seen as a good first step by many groups.";

fn benchmark_analyze_sentiment(c: &mut Criterion) {
    let scorer = SentimentScorer::default();

    c.bench_function("analyze_sentiment_short", |b| {
        b.iter(|| scorer.analyze_text(black_box("This is great and wonderful, no problem at all")))
    });

    c.bench_function("analyze_sentiment_long", |b| {
        b.iter(|| scorer.analyze_text(black_box(LONG_TEXT)))
    });
}

fn benchmark_summarize(c: &mut Criterion) {
    let summarizer = ExtractiveSummarizer::default();

    c.bench_function("summarize_long", |b| {
        b.iter(|| summarizer.summarize(black_box(Some(LONG_TEXT)), black_box(3)))
    });
}

fn benchmark_analyze_csv(c: &mut Criterion) {
    let csv: String = std::iter::once("id,comment".to_string())
        .chain(
            LONG_TEXT
                .split(". ")
                .enumerate()
                .map(|(idx, sentence)| format!("{},\"{}\"", idx + 1, sentence)),
        )
        .collect::<Vec<_>>()
        .join("\n");

    c.bench_function("analyze_csv", |b| {
        b.iter(|| analyze_csv(black_box(&csv)).expect("Analysis failed"))
    });
}

criterion_group!(
    benches,
    benchmark_analyze_sentiment,
    benchmark_summarize,
    benchmark_analyze_csv
);
criterion_main!(benches);
