use clap::Parser;
use std::path::PathBuf;

/// Build an alphabetized keyword-in-context index from a text file.
#[derive(Parser, Debug)]
#[command(name = "kwic", version, about)]
pub struct Cli {
    /// Input file: plain UTF-8 text, one title or phrase per line
    pub input: PathBuf,
}
