use crate::{document::SourceDocument, error::Result, table::TypeTable};
use std::path::Path;

/// Extracts a type table from one engine's header.
pub trait Analyzer {
    fn from_document(document: SourceDocument) -> Self
    where
        Self: Sized;

    fn document(&self) -> &SourceDocument;

    /// Names in source order, or `None` if the expected block is absent.
    fn process_list(&self) -> Option<Vec<String>>;

    fn process(&self) -> Result<TypeTable>;

    #[inline]
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        SourceDocument::open(path).map(Self::from_document)
    }

    #[inline]
    fn from_source(text: &str) -> Self
    where
        Self: Sized,
    {
        Self::from_document(SourceDocument::from_text(text))
    }
}
