// Index construction - tokenization, keyword selection, rotation.

pub mod generate;
pub mod keywords;
pub mod rotate;
pub mod stopwords;
pub mod token;

pub use generate::KwicGenerator;
pub use keywords::keywords_in;
pub use rotate::rotate;
pub use stopwords::is_stop_word;
pub use token::tokens;

/// One row of the index: a line rotated to start at a keyword, paired with
/// the line it came from.
///
/// Field order doubles as the sort key: entries order by rotated text
/// first, origin line as tiebreak.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KwicEntry {
    pub rotated: String,
    pub origin: String,
}
