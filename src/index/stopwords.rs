use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Portuguese function words excluded from keyword consideration.
    /// Fixed at startup, read-only for the life of the process.
    pub static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "o", "e", "as", "os", "um", "uma", "uns", "umas", "é", "são",
        "de", "do", "da", "dos", "das", "em", "no", "na", "nos", "nas",
        "por", "para", "com", "se", "que", "ou", "mas", "como", "tal",
    ]
    .into_iter()
    .collect();
}

/// Membership is case-insensitive: the set stores lowercase forms and the
/// candidate is lowercased before lookup.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}
