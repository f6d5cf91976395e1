//! V8 `InstanceType` lists.

use crate::{
    analyzer::Analyzer,
    document::SourceDocument,
    error::{Error, Result},
    instance_type::build_instance_type_table,
    matcher,
    scanner::{BlockSyntax, Collected, LineScanner},
    string_type::{string_type_list, string_type_table},
    table::TypeTable,
};

/// A backslash-continued `#define NAME(V)` list of `V(...)` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacroList {
    pub name: &'static str,
    pub definition: &'static str,
    /// Parameter the list applies to each entry.
    pub entry: &'static str,
    /// Another list referenced by name from inside this one.
    pub nested: Option<&'static MacroList>,
}

pub const ARRAY_ITERATOR_TYPE_LIST: MacroList = MacroList {
    name: "ARRAY_ITERATOR_TYPE_LIST",
    definition: "#define ARRAY_ITERATOR_TYPE_LIST",
    entry: "V",
    nested: None,
};

pub const INSTANCE_TYPE_LIST: MacroList = MacroList {
    name: "INSTANCE_TYPE_LIST",
    definition: "#define INSTANCE_TYPE_LIST",
    entry: "V",
    nested: Some(&ARRAY_ITERATOR_TYPE_LIST),
};

impl BlockSyntax for MacroList {
    #[inline]
    fn marker(&self) -> &str {
        self.definition
    }

    #[inline]
    fn is_terminator(&self, line: &str) -> bool {
        !matcher::continues(line)
    }

    fn collect<'l>(&self, line: &'l str) -> Collected<'l, Self> {
        if let Some(nested) = self.nested {
            if line.contains(nested.name) {
                return Collected::Nested(*nested);
            }
        }
        match matcher::macro_entry(line, self.entry) {
            Some(name) => Collected::Name(name),
            None => Collected::Skip,
        }
    }
}

pub struct V8Analyzer {
    document: SourceDocument,
}

impl V8Analyzer {
    /// All instance type names with the array iterator types inlined.
    #[inline]
    pub fn process_instance_type_list(&self) -> Option<Vec<String>> {
        LineScanner::new(&self.document).scan(&INSTANCE_TYPE_LIST)
    }

    #[inline]
    pub fn process_array_iterator_type_list(&self) -> Option<Vec<String>> {
        LineScanner::new(&self.document).scan(&ARRAY_ITERATOR_TYPE_LIST)
    }

    #[inline]
    pub fn process_string_type_list(&self) -> Vec<(&'static str, u8)> {
        string_type_list()
    }
}

impl Analyzer for V8Analyzer {
    #[inline]
    fn from_document(document: SourceDocument) -> Self {
        V8Analyzer { document }
    }

    #[inline]
    fn document(&self) -> &SourceDocument {
        &self.document
    }

    #[inline]
    fn process_list(&self) -> Option<Vec<String>> {
        self.process_instance_type_list()
    }

    fn process(&self) -> Result<TypeTable> {
        let names = self
            .process_instance_type_list()
            .ok_or_else(|| Error::marker_not_found(INSTANCE_TYPE_LIST.definition))?;
        build_instance_type_table(&names, string_type_table())
    }
}
