//! Line-by-line block scanning.
//!
//! A scan seeks a marker line, collects names from every following non-blank
//! line, and stops after the first line satisfying the block's terminator.

use crate::document::SourceDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    Seeking,
    Collecting,
    Done,
}

/// What a collected line contributes to the result.
#[derive(Debug, PartialEq, Eq)]
pub enum Collected<'l, B> {
    Name(&'l str),
    /// Splice the full result of another block at this position.
    Nested(B),
    Skip,
}

/// The lexical shape of one block kind.
pub trait BlockSyntax: Sized {
    /// Substring identifying the first line of the block.
    fn marker(&self) -> &str;

    fn is_terminator(&self, line: &str) -> bool;

    fn collect<'l>(&self, line: &'l str) -> Collected<'l, Self>;
}

pub struct LineScanner<'d> {
    document: &'d SourceDocument,
}

impl<'d> LineScanner<'d> {
    #[inline]
    pub fn new(document: &'d SourceDocument) -> LineScanner<'d> {
        LineScanner { document }
    }

    /// Returns `None` if the marker never appears, including the marker of
    /// any nested block referenced from inside this one.
    pub fn scan<B: BlockSyntax>(&self, block: &B) -> Option<Vec<String>> {
        let mut state = State::Seeking;
        let mut names = Vec::new();
        for (i, line) in self.document.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match state {
                State::Done => break,
                State::Seeking => {
                    if line.contains(block.marker()) {
                        log::debug!("found {:?} at line {}", block.marker(), i + 1);
                        state = State::Collecting;
                    }
                }
                State::Collecting => {
                    if block.is_terminator(line) {
                        log::debug!("end of {:?} at line {}", block.marker(), i + 1);
                        state = State::Done;
                    }
                    match block.collect(line) {
                        Collected::Name(name) => {
                            log::trace!("{}: {}", names.len(), name);
                            names.push(name.to_owned());
                        }
                        Collected::Nested(nested) => {
                            log::debug!("splicing {:?} at line {}", nested.marker(), i + 1);
                            names.extend(self.scan(&nested)?);
                        }
                        Collected::Skip => {}
                    }
                }
            }
        }
        match state {
            State::Seeking => {
                log::warn!("marker {:?} not found", block.marker());
                None
            }
            State::Collecting | State::Done => Some(names),
        }
    }
}
