// Sorted, column-aligned rendering of the finished index.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::KwicError;
use crate::index::KwicEntry;

/// Gap between the rotated column and the origin reference.
const COLUMN_GAP: &str = "    ";

/// Materialize the entries, sort them, and write the aligned index.
///
/// The whole sequence is collected before anything is written: the
/// alphabetical sort and the column width both need the full set, and
/// collecting first means a failing pipeline produces no partial output.
/// Zero entries (an empty file, or one holding only stop words) is an
/// error, since there is no widest entry to align against.
pub fn render_index<I, W>(entries: I, out: &mut W) -> Result<(), KwicError>
where
    I: Iterator<Item = Result<KwicEntry, KwicError>>,
    W: Write,
{
    let mut entries: Vec<KwicEntry> = entries.collect::<Result<_, _>>()?;
    if entries.is_empty() {
        return Err(KwicError::EmptyInput);
    }

    let column = entries
        .iter()
        .map(|entry| entry.rotated.width())
        .max()
        .unwrap_or(0);
    entries.sort();

    for entry in &entries {
        let padding = column - entry.rotated.width();
        writeln!(
            out,
            "{}{}{}(from \"{}\")",
            entry.rotated,
            " ".repeat(padding),
            COLUMN_GAP,
            entry.origin
        )?;
    }

    Ok(())
}
