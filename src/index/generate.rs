use crate::error::KwicError;

use super::keywords::keywords_in;
use super::rotate::rotate;
use super::KwicEntry;

/// The assembled pipeline: lines in, index entries out.
///
/// Adapts any fallible line sequence into a sequence of `KwicEntry`
/// results, one per keyword occurrence, produced on demand. Only the line
/// currently being indexed is held; its keyword walk is recomputed per
/// pull instead of buffered, which the restartable tokenizer makes
/// correct. Read errors from the line source pass straight through.
pub struct KwicGenerator<I> {
    lines: I,
    current: Option<String>,
    emitted: usize,
}

impl<I> KwicGenerator<I>
where
    I: Iterator<Item = Result<String, KwicError>>,
{
    pub fn new(lines: I) -> Self {
        KwicGenerator {
            lines,
            current: None,
            emitted: 0,
        }
    }
}

impl<I> Iterator for KwicGenerator<I>
where
    I: Iterator<Item = Result<String, KwicError>>,
{
    type Item = Result<KwicEntry, KwicError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = &self.current {
                if let Some((keyword, origin)) = keywords_in(line).nth(self.emitted) {
                    self.emitted += 1;
                    let entry = rotate(keyword, origin).map(|rotated| KwicEntry {
                        rotated,
                        origin: origin.to_string(),
                    });
                    return Some(entry);
                }
            }

            // Current line exhausted (or none yet): advance the source.
            match self.lines.next()? {
                Ok(line) => {
                    self.current = Some(line);
                    self.emitted = 0;
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
