//! Keyword-in-Context (KWIC) index generation.
//!
//! Reads a file of titles or phrases and produces an alphabetized index of
//! every significant word, each shown with its line rotated so the word
//! comes first. Line reading, tokenization, stop-word filtering and
//! rotation are lazy pull-based stages; only the final sort-and-align pass
//! materializes the entries.

pub mod cli;
pub mod error;
pub mod index;
pub mod input;
pub mod output;

pub use error::KwicError;
pub use index::{KwicEntry, KwicGenerator};
