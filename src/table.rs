use std::{
    collections::{btree_map, BTreeMap},
    fmt,
    iter::FromIterator,
};

/// A single-byte type tag.
pub type TypeCode = u8;

/// Type code -> name. Iterates in ascending code order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeTable(BTreeMap<TypeCode, String>);

impl TypeTable {
    #[inline]
    pub fn new() -> TypeTable {
        TypeTable(BTreeMap::new())
    }

    /// Overwrites any existing entry and returns the replaced name.
    #[inline]
    pub fn insert<S: Into<String>>(&mut self, code: TypeCode, name: S) -> Option<String> {
        self.0.insert(code, name.into())
    }

    #[inline]
    pub fn get(&self, code: TypeCode) -> Option<&str> {
        self.0.get(&code).map(|s| s.as_str())
    }

    /// The lowest code mapped to `name`.
    pub fn code_of(&self, name: &str) -> Option<TypeCode> {
        self.0.iter().find(|(_, v)| v.as_str() == name).map(|(&k, _)| k)
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, TypeCode, String> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_inner(self) -> BTreeMap<TypeCode, String> {
        self.0
    }
}

impl From<BTreeMap<TypeCode, String>> for TypeTable {
    fn from(map: BTreeMap<TypeCode, String>) -> Self {
        TypeTable(map)
    }
}

impl<S: Into<String>> FromIterator<(TypeCode, S)> for TypeTable {
    /// Later pairs win over earlier ones with the same code.
    fn from_iter<I: IntoIterator<Item = (TypeCode, S)>>(iter: I) -> Self {
        let mut table = TypeTable::new();
        for (code, name) in iter {
            table.insert(code, name);
        }
        table
    }
}

impl<'a> IntoIterator for &'a TypeTable {
    type Item = (&'a TypeCode, &'a String);
    type IntoIter = btree_map::Iter<'a, TypeCode, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for TypeTable {
    type Item = (TypeCode, String);
    type IntoIter = btree_map::IntoIter<TypeCode, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One `CODE: NAME` line per entry.
impl fmt::Display for TypeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (code, name) in self.iter() {
            writeln!(f, "{}: {}", code, name)?;
        }
        Ok(())
    }
}
