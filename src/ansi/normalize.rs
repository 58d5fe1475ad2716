//! Backslash shorthand normalization.
//!
//! Terminal snippets pasted into documents often spell escape characters
//! out (`\e[31m`, `\x1b[0m`). These are rewritten into the real control
//! characters before tokenization:
//!
//! | Shorthand | Result              |
//! |-----------|---------------------|
//! | `\e`      | ESC (0x1B)          |
//! | `\n`      | newline             |
//! | `\t`      | tab                 |
//! | `\xHH`    | U+00HH              |
//! | `\uHHHH`  | U+HHHH              |
//!
//! The scan is a single left-to-right pass; replacements are never
//! rescanned, and unrecognized backslashes are kept verbatim.

use std::borrow::Cow;

/// Rewrite backslash shorthands into control characters.
///
/// Borrows the input when it contains nothing to rewrite.
pub fn normalize_shorthands(input: &str) -> Cow<'_, str> {
    if !input.contains('\\') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match expand(after) {
            Some((c, consumed)) => {
                out.push(c);
                rest = &after[consumed..];
            }
            None => {
                out.push('\\');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Expand the shorthand that follows a backslash.
///
/// Returns the character and how many bytes of `after` it used.
fn expand(after: &str) -> Option<(char, usize)> {
    match after.as_bytes().first()? {
        b'e' => Some(('\x1b', 1)),
        b'n' => Some(('\n', 1)),
        b't' => Some(('\t', 1)),
        b'x' => hex_digits(&after[1..], 2)
            .and_then(char::from_u32)
            .map(|c| (c, 3)),
        b'u' => hex_digits(&after[1..], 4)
            .and_then(char::from_u32)
            .map(|c| (c, 5)),
        _ => None,
    }
}

/// Parse exactly `len` leading ASCII hex digits.
fn hex_digits(s: &str, len: usize) -> Option<u32> {
    let digits = s.get(..len)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
