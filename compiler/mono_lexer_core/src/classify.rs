//! Byte classification.
//!
//! All predicates are ASCII-only, matching the C locale: bytes above `0x7F`
//! are never name bytes and never whitespace.

/// Returns `true` for bytes that may appear in a C identifier:
/// ASCII letters, digits, and `_`.
#[inline]
pub const fn is_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// The C `isspace` set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Whitespace or any ASCII control byte (including the `0x00` terminator).
#[inline]
pub const fn is_blank_or_control(c: u8) -> bool {
    is_space(c) || c.is_ascii_control()
}

/// Constant-time membership test for a fixed set of bytes.
///
/// Built at compile time from a byte string:
///
/// ```
/// use mono_lexer_core::ByteSet;
///
/// const QUOTES: ByteSet = ByteSet::new(b"'\"");
/// assert!(QUOTES.contains(b'"'));
/// assert!(!QUOTES.contains(b'a'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteSet([bool; 256]);

impl ByteSet {
    /// Build a set containing every byte of `bytes`.
    pub const fn new(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            i += 1;
        }
        Self(table)
    }

    /// Returns `true` if `c` is in the set.
    #[inline]
    pub const fn contains(&self, c: u8) -> bool {
        self.0[c as usize]
    }
}

#[cfg(test)]
mod tests;
