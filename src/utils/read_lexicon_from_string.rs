use crate::types::Term;
use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;

const TERM_COLUMN: &str = "Term";
const POLARITY_COLUMN: &str = "Polarity";

/// Reads `(positive_terms, negative_terms)` from CSV text with `Term` and
/// `Polarity` columns. Polarity is `positive` or `negative`, case-insensitive.
pub fn read_lexicon_from_string(csv: &str) -> Result<(Vec<Term>, Vec<Term>), Error> {
    let mut positive_terms = Vec::new();
    let mut negative_terms = Vec::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column_position = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
    };
    let term_idx = column_position(TERM_COLUMN)?;
    let polarity_idx = column_position(POLARITY_COLUMN)?;

    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let term = record.get(term_idx).unwrap_or_default();
        let polarity = record.get(polarity_idx).unwrap_or_default();

        match polarity.to_lowercase().as_str() {
            "positive" => positive_terms.push(term.to_string()),
            "negative" => negative_terms.push(term.to_string()),
            other => {
                return Err(Error::ParserError(format!(
                    "Unknown polarity '{}' for term '{}' on row {}",
                    other,
                    term,
                    row_idx + 1
                )))
            }
        }
    }

    Ok((positive_terms, negative_terms))
}
