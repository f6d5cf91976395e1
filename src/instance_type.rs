use crate::{
    error::{Error, ErrorKind, Result},
    table::{TypeCode, TypeTable},
};

/// First instance type that is not a string.
pub const SYMBOL_TYPE: &str = "SYMBOL_TYPE";
pub const FIRST_NONSTRING_TYPE: TypeCode = 0x80;

/// Overlays the position-derived codes of `names` onto `string_types`.
///
/// The sentinel gets [`FIRST_NONSTRING_TYPE`] and each later name the next
/// code, replacing whatever the string table held at that code.
pub fn build_instance_type_table<S: AsRef<str>>(names: &[S], string_types: &TypeTable) -> Result<TypeTable> {
    let mut table = string_types.clone();
    let sentinel = names
        .iter()
        .position(|name| name.as_ref() == SYMBOL_TYPE)
        .ok_or_else(|| {
            log::warn!("{} not found in {} names", SYMBOL_TYPE, names.len());
            Error::with_str(ErrorKind::SentinelNotFound, SYMBOL_TYPE)
        })?;
    for (offset, name) in names[sentinel..].iter().enumerate() {
        let name = name.as_ref();
        let code = u8::try_from(offset)
            .ok()
            .and_then(|offset| FIRST_NONSTRING_TYPE.checked_add(offset))
            .ok_or_else(|| {
                Error::with_str(
                    ErrorKind::CodeOverflow,
                    format!("{} is {} entries past {}", name, offset, SYMBOL_TYPE),
                )
            })?;
        if let Some(old) = table.insert(code, name) {
            log::debug!("{:#04x}: {} replaces {}", code, name, old);
        }
    }
    Ok(table)
}
