pub mod count_term_frequencies;
pub use count_term_frequencies::count_term_frequencies;

pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod read_input_file;
pub use read_input_file::read_input_file;

pub mod read_lexicon_from_string;
pub use read_lexicon_from_string::read_lexicon_from_string;

pub mod round_to_decimals;
pub use round_to_decimals::round_to_decimals;

pub mod sort_scored_sentences;
pub use sort_scored_sentences::sort_scored_sentences;

pub mod truncate_preview;
pub use truncate_preview::truncate_preview;
