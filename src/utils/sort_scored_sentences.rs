use crate::models::ScoredSentence;

/// Sorts scored sentences into ranking order.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in descending order (higher score first).
/// - **Secondary:** If two sentences have the same score, the one appearing
///   earlier in the source text comes first.
pub fn sort_scored_sentences(scored_sentences: &mut [ScoredSentence<'_>]) {
    scored_sentences.sort_by(|a, b| {
        b.score
            .cmp(&a.score) // Sort by score (descending)
            .then_with(|| a.original_index.cmp(&b.original_index)) // Earlier sentence wins a tie
    });
}
