use super::stopwords::is_stop_word;
use super::token::tokens;

/// Walk a line's tokens and yield `(keyword, line)` for every token whose
/// lowercased form is not a stop word, in left-to-right order.
///
/// The line is passed through untouched so later stages can re-tokenize
/// it; keywords are borrowed slices of it, never copies.
pub fn keywords_in(line: &str) -> impl Iterator<Item = (&str, &str)> {
    tokens(line)
        .filter(|token| !is_stop_word(token))
        .map(move |token| (token, line))
}
