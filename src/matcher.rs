//! Fixed lexical patterns recognized inside header blocks.
//!
//! All functions expect a line that was already trimmed.

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ident_char)
}

/// `Name,` with nothing else on the line.
pub fn enum_entry(line: &str) -> Option<&str> {
    let name = line.strip_suffix(',')?;
    if is_ident(name) {
        Some(name)
    } else {
        None
    }
}

/// `TOKEN(args)` where `TOKEN` is the entry macro parameter.
///
/// The argument region runs up to the last closing parenthesis on the line,
/// and the name is its leading identifier up to the first top-level comma.
pub fn macro_entry<'a>(line: &'a str, token: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(token)?.strip_prefix('(')?;
    let close = rest.rfind(')')?;
    let args = &rest[..close];
    if args.is_empty() {
        return None;
    }
    let name = leading_argument(args).trim();
    if is_ident(name) {
        Some(name)
    } else {
        None
    }
}

fn leading_argument(args: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return &args[..i],
            _ => {}
        }
    }
    args
}

/// Whether a macro definition continues on the next line.
#[inline]
pub fn continues(line: &str) -> bool {
    line.ends_with('\\')
}

/// Whether a line closes a brace-delimited declaration.
#[inline]
pub fn closes_declaration(line: &str) -> bool {
    line.ends_with("};")
}
