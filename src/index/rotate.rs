use crate::error::KwicError;

use super::token::tokens;

/// Rotate a line's tokens so that `keyword` comes first, wrapping the
/// preceding tokens around to the end, joined with single spaces.
///
/// The match is exact (case-sensitive) and always the *first* occurrence:
/// a keyword appearing twice in a line rotates from the same pivot both
/// times, producing identical output for both occurrences.
pub fn rotate(keyword: &str, line: &str) -> Result<String, KwicError> {
    let words: Vec<&str> = tokens(line).collect();
    let pivot = words
        .iter()
        .position(|word| *word == keyword)
        .ok_or_else(|| KwicError::KeywordNotFound {
            keyword: keyword.to_string(),
            line: line.to_string(),
        })?;

    let mut rotated = Vec::with_capacity(words.len());
    rotated.extend_from_slice(&words[pivot..]);
    rotated.extend_from_slice(&words[..pivot]);
    Ok(rotated.join(" "))
}
