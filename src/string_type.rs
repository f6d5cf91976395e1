//! V8 string instance types.
//!
//! The low half of V8's instance type space packs string attributes into
//! a byte. Bit 7 is clear for strings, bit 6 is set for non-internalized
//! strings, bit 3 selects one-byte encoding and the low three bits hold the
//! representation.

use crate::table::TypeTable;
use bitflags::bitflags;
use lazy_static::lazy_static;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StringTag: u8 {
        const NOT_STRING = 0x80;
        const NOT_INTERNALIZED = 0x40;
        const SHORT_EXTERNAL = 0x20;
        const ONE_BYTE_DATA_HINT = 0x10;
        const ONE_BYTE = 0x08;
        /// 3-bit field, see [`Representation`]
        const REPRESENTATION_MASK = 0x07;
    }
}

impl StringTag {
    pub const STRING: StringTag = StringTag::empty();
    pub const INTERNALIZED: StringTag = StringTag::empty();
    pub const TWO_BYTE: StringTag = StringTag::empty();

    /// Set for cons, sliced and thin strings.
    pub const INDIRECT: StringTag = StringTag::from_bits_retain(0x01);

    pub const SHORTCUT_MASK: StringTag =
        StringTag::NOT_STRING.union(StringTag::NOT_INTERNALIZED).union(StringTag::REPRESENTATION_MASK);
    pub const SHORTCUT_TAG: StringTag = Representation::Cons.tag().union(StringTag::NOT_INTERNALIZED);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Representation {
    Seq = 0x0,
    Cons = 0x1,
    External = 0x2,
    Sliced = 0x3,
    Thin = 0x5,
}

impl Representation {
    #[inline]
    pub const fn tag(self) -> StringTag {
        StringTag::from_bits_retain(self as u8)
    }

    pub fn from_code(code: u8) -> Option<Representation> {
        Some(match code & StringTag::REPRESENTATION_MASK.bits() {
            0x0 => Representation::Seq,
            0x1 => Representation::Cons,
            0x2 => Representation::External,
            0x3 => Representation::Sliced,
            0x5 => Representation::Thin,
            _ => return None,
        })
    }
}

/// Attributes recovered from a string instance type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StringShape {
    pub representation: Representation,
    pub one_byte: bool,
    pub internalized: bool,
    pub one_byte_data_hint: bool,
    pub short_external: bool,
}

impl StringShape {
    /// Returns `None` for codes that are not strings or carry an unused
    /// representation value.
    pub fn decode(code: u8) -> Option<StringShape> {
        let tag = StringTag::from_bits_retain(code);
        if tag.contains(StringTag::NOT_STRING) {
            return None;
        }
        Some(StringShape {
            representation: Representation::from_code(code)?,
            one_byte: tag.contains(StringTag::ONE_BYTE),
            internalized: !tag.contains(StringTag::NOT_INTERNALIZED),
            one_byte_data_hint: tag.contains(StringTag::ONE_BYTE_DATA_HINT),
            short_external: tag.contains(StringTag::SHORT_EXTERNAL),
        })
    }

    /// The tag bits this shape decodes from.
    pub fn tag(&self) -> StringTag {
        let mut tag = StringTag::STRING | self.representation.tag();
        tag.set(StringTag::ONE_BYTE, self.one_byte);
        tag.set(StringTag::NOT_INTERNALIZED, !self.internalized);
        tag.set(StringTag::ONE_BYTE_DATA_HINT, self.one_byte_data_hint);
        tag.set(StringTag::SHORT_EXTERNAL, self.short_external);
        tag
    }

    #[inline]
    pub fn is_indirect(&self) -> bool {
        self.representation.tag().contains(StringTag::INDIRECT)
    }

    /// Non-internalized cons strings, which the collector may short-cut to
    /// their first part.
    #[inline]
    pub fn is_shortcut_candidate(&self) -> bool {
        self.tag() & StringTag::SHORTCUT_MASK == StringTag::SHORTCUT_TAG
    }
}

pub const INTERNALIZED_STRING_TYPE: &str = "INTERNALIZED_STRING_TYPE";
pub const THIN_ONE_BYTE_STRING_TYPE: &str = "THIN_ONE_BYTE_STRING_TYPE";

/// Every named string instance type with its code, in definition order.
///
/// Codes may repeat; [`string_type_table`] keeps the last name for a code.
pub fn string_type_list() -> Vec<(&'static str, u8)> {
    use Representation::*;
    use StringTag as T;

    let internalized = T::TWO_BYTE | Seq.tag() | T::INTERNALIZED;
    let one_byte_internalized = T::ONE_BYTE | Seq.tag() | T::INTERNALIZED;
    let external_internalized = T::TWO_BYTE | External.tag() | T::INTERNALIZED;
    let external_one_byte_internalized = T::ONE_BYTE | External.tag() | T::INTERNALIZED;
    let external_internalized_with_one_byte_data =
        external_internalized | T::ONE_BYTE_DATA_HINT | T::INTERNALIZED;
    let short_external_internalized = external_internalized | T::SHORT_EXTERNAL | T::INTERNALIZED;
    let short_external_one_byte_internalized = external_one_byte_internalized | T::SHORT_EXTERNAL | T::INTERNALIZED;
    let short_external_internalized_with_one_byte_data =
        external_internalized_with_one_byte_data | T::SHORT_EXTERNAL | T::INTERNALIZED;

    let types = [
        (INTERNALIZED_STRING_TYPE, internalized),
        ("ONE_BYTE_INTERNALIZED_STRING_TYPE", one_byte_internalized),
        ("EXTERNAL_INTERNALIZED_STRING_TYPE", external_internalized),
        ("EXTERNAL_ONE_BYTE_INTERNALIZED_STRING_TYPE", external_one_byte_internalized),
        (
            "EXTERNAL_INTERNALIZED_STRING_WITH_ONE_BYTE_DATA_TYPE",
            external_internalized_with_one_byte_data,
        ),
        ("SHORT_EXTERNAL_INTERNALIZED_STRING_TYPE", short_external_internalized),
        (
            "SHORT_EXTERNAL_ONE_BYTE_INTERNALIZED_STRING_TYPE",
            short_external_one_byte_internalized,
        ),
        (
            "SHORT_EXTERNAL_INTERNALIZED_STRING_WITH_ONE_BYTE_DATA_TYPE",
            short_external_internalized_with_one_byte_data,
        ),
        ("STRING_TYPE", internalized | T::NOT_INTERNALIZED),
        ("ONE_BYTE_STRING_TYPE", one_byte_internalized | T::NOT_INTERNALIZED),
        ("CONS_STRING_TYPE", T::TWO_BYTE | Cons.tag() | T::NOT_INTERNALIZED),
        ("CONS_ONE_BYTE_STRING_TYPE", T::ONE_BYTE | Cons.tag() | T::NOT_INTERNALIZED),
        ("SLICED_STRING_TYPE", T::TWO_BYTE | Sliced.tag() | T::NOT_INTERNALIZED),
        ("SLICED_ONE_BYTE_STRING_TYPE", T::ONE_BYTE | Sliced.tag() | T::NOT_INTERNALIZED),
        ("EXTERNAL_STRING_TYPE", external_internalized | T::NOT_INTERNALIZED),
        ("EXTERNAL_ONE_BYTE_STRING_TYPE", external_one_byte_internalized | T::NOT_INTERNALIZED),
        (
            "EXTERNAL_STRING_WITH_ONE_BYTE_DATA_TYPE",
            external_internalized_with_one_byte_data | T::NOT_INTERNALIZED,
        ),
        ("SHORT_EXTERNAL_STRING_TYPE", short_external_internalized | T::NOT_INTERNALIZED),
        (
            "SHORT_EXTERNAL_ONE_BYTE_STRING_TYPE",
            short_external_one_byte_internalized | T::NOT_INTERNALIZED,
        ),
        (
            "SHORT_EXTERNAL_STRING_WITH_ONE_BYTE_DATA_TYPE",
            short_external_internalized_with_one_byte_data | T::NOT_INTERNALIZED,
        ),
        ("THIN_STRING_TYPE", T::TWO_BYTE | Thin.tag() | T::NOT_INTERNALIZED),
        (THIN_ONE_BYTE_STRING_TYPE, T::ONE_BYTE | Thin.tag() | T::NOT_INTERNALIZED),
    ];
    types.iter().map(|&(name, tag)| (name, tag.bits())).collect()
}

lazy_static! {
    static ref STRING_TYPE_TABLE: TypeTable = string_type_list()
        .into_iter()
        .map(|(name, code)| (code, name.to_owned()))
        .collect();
}

/// [`string_type_list`] inverted to code -> name.
pub fn string_type_table() -> &'static TypeTable {
    &STRING_TYPE_TABLE
}
