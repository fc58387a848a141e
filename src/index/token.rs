/// Split a line into its whitespace-delimited tokens.
///
/// Boundaries are runs of whitespace, nothing else: tokens keep their
/// original casing and any attached punctuation, and a blank line yields
/// an empty sequence. Calling this again on the same line restarts the
/// walk from the first token.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}
