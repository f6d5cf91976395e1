//! JavaScriptCore `JSType` enumeration.

use crate::{
    analyzer::Analyzer,
    document::SourceDocument,
    error::{Error, ErrorKind, Result},
    matcher,
    scanner::{BlockSyntax, Collected, LineScanner},
    table::TypeTable,
};

/// A brace-delimited enum whose entries are bare `Name,` lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumBlock {
    pub declaration: &'static str,
}

pub const JS_TYPE_ENUM: EnumBlock = EnumBlock {
    declaration: "enum JSType : uint8_t {",
};

impl BlockSyntax for EnumBlock {
    #[inline]
    fn marker(&self) -> &str {
        self.declaration
    }

    #[inline]
    fn is_terminator(&self, line: &str) -> bool {
        matcher::closes_declaration(line)
    }

    fn collect<'l>(&self, line: &'l str) -> Collected<'l, Self> {
        match matcher::enum_entry(line) {
            Some(name) => Collected::Name(name),
            None => Collected::Skip,
        }
    }
}

pub struct JscAnalyzer {
    document: SourceDocument,
}

impl JscAnalyzer {
    #[inline]
    pub fn process_js_type_list(&self) -> Option<Vec<String>> {
        LineScanner::new(&self.document).scan(&JS_TYPE_ENUM)
    }
}

impl Analyzer for JscAnalyzer {
    #[inline]
    fn from_document(document: SourceDocument) -> Self {
        JscAnalyzer { document }
    }

    #[inline]
    fn document(&self) -> &SourceDocument {
        &self.document
    }

    #[inline]
    fn process_list(&self) -> Option<Vec<String>> {
        self.process_js_type_list()
    }

    /// Numbers the enumerators from zero in declaration order.
    fn process(&self) -> Result<TypeTable> {
        let names = self
            .process_js_type_list()
            .ok_or_else(|| Error::marker_not_found(JS_TYPE_ENUM.declaration))?;
        let mut table = TypeTable::new();
        for (i, name) in names.into_iter().enumerate() {
            let code = u8::try_from(i)
                .map_err(|_| Error::with_str(ErrorKind::CodeOverflow, format!("{} is enumerator #{}", name, i)))?;
            table.insert(code, name);
        }
        Ok(table)
    }
}
