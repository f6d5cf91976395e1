use crate::error::{Error, Result};
use std::{fs, path::Path};

/// Lines of a header file, read once and never modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::open(path, e))?;
        let document = SourceDocument::from_text(&text);
        log::debug!("read {} lines from {}", document.len(), path.display());
        Ok(document)
    }

    pub fn from_text(text: &str) -> SourceDocument {
        SourceDocument {
            lines: text.lines().map(|s| s.to_owned()).collect(),
        }
    }

    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
