use crate::constants::{DEFAULT_NEGATIVE_TERMS, DEFAULT_POSITIVE_TERMS};
use crate::types::{Term, TokenRef};
use crate::utils::{dedup_vector, read_lexicon_from_string};
use crate::Error;
use std::collections::HashSet;

/// Positive and negative term lists used by the sentiment scorer.
///
/// Terms are lower-cased and trimmed on construction, and the two lists are
/// guaranteed to be disjoint. A `Lexicon` is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    positive_terms: Vec<Term>,
    negative_terms: Vec<Term>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive_terms: DEFAULT_POSITIVE_TERMS.iter().map(|t| t.to_string()).collect(),
            negative_terms: DEFAULT_NEGATIVE_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Builds a lexicon from arbitrary term lists.
    ///
    /// Returns `Error::LexiconError` if a term is present in both lists.
    pub fn new<P, N, S>(positive_terms: P, negative_terms: N) -> Result<Self, Error>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive_terms = Self::normalize_terms(positive_terms);
        let negative_terms = Self::normalize_terms(negative_terms);

        let positive_set: HashSet<&Term> = positive_terms.iter().collect();
        if let Some(shared) = negative_terms.iter().find(|t| positive_set.contains(t)) {
            return Err(Error::LexiconError(format!(
                "Term '{}' is listed as both positive and negative",
                shared
            )));
        }

        Ok(Self {
            positive_terms,
            negative_terms,
        })
    }

    /// Loads a lexicon from CSV text with `Term` and `Polarity` columns.
    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        let (positive_terms, negative_terms) = read_lexicon_from_string(csv)?;

        Self::new(positive_terms, negative_terms)
    }

    pub fn positive_terms(&self) -> &[Term] {
        &self.positive_terms
    }

    pub fn negative_terms(&self) -> &[Term] {
        &self.negative_terms
    }

    /// Number of distinct (positive, negative) terms contained in `lowered_text`.
    ///
    /// Matching is plain substring containment, so "badly" counts as "bad".
    /// Each term contributes at most once no matter how often it occurs.
    pub fn count_matches(&self, lowered_text: &TokenRef) -> (usize, usize) {
        let count = |terms: &[Term]| {
            terms
                .iter()
                .filter(|term| lowered_text.contains(term.as_str()))
                .count()
        };

        (count(&self.positive_terms), count(&self.negative_terms))
    }

    fn normalize_terms<I, S>(terms: I) -> Vec<Term>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<Term> = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        dedup_vector(&terms)
    }
}
