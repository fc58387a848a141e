use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::KwicError;

/// Lazy reader over the lines of a text source.
///
/// Yields one line per pull, trimmed of surrounding whitespace (the
/// newline included). The sequence is a single forward pass; the
/// underlying handle is owned by the reader and closed when it is
/// dropped, whether iteration finished, failed, or was abandoned early.
pub struct LineReader<R> {
    lines: io::Lines<R>,
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading.
    ///
    /// Fails up front if the path does not exist or cannot be read.
    pub fn open(path: &Path) -> Result<Self, KwicError> {
        let file = File::open(path).map_err(|source| KwicError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap any buffered reader, e.g. an in-memory cursor in tests.
    pub fn from_reader(reader: R) -> Self {
        LineReader {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, KwicError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(match line {
            Ok(line) => Ok(line.trim().to_string()),
            Err(err) => Err(KwicError::Io(err)),
        })
    }
}
