use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KwicError {
    #[error("cannot open {path}: {source}")]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input contains no keywords")]
    EmptyInput,

    /// A keyword reported by the filter stage was absent when the line was
    /// re-tokenized for rotation. The stages share the same line text, so
    /// this indicates a bug, not bad input.
    #[error("keyword \"{keyword}\" not found in line \"{line}\"")]
    KeywordNotFound { keyword: String, line: String },
}
