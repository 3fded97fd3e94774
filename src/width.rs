//! Display-width lookup
//!
//! Answers "how many terminal columns does this character occupy" with
//! classic wcwidth semantics, backed by the `unicode-width` tables.

use unicode_width::UnicodeWidthChar;

use crate::encoding::Encoding;

/// Display width of a decoded character, in terminal columns.
///
/// Returns 0 for NUL and combining/zero-width characters, 1 for ordinary
/// characters, 2 for wide characters (CJK and friends), and -1 for other
/// non-printable code points. Callers must treat -1 as "non-printable",
/// not as an error.
pub fn display_width(ch: char) -> i32 {
    if ch == '\0' {
        return 0;
    }
    ch.width().map(|w| w as i32).unwrap_or(-1)
}

/// Display width of the leading character of `buffer`.
///
/// Decodes with `encoding` and measures the result. A buffer that does not
/// begin with a decodable character yields 0 rather than an error; note
/// that 0 is therefore ambiguous between "decode failed" and "genuinely
/// zero-width character", and callers cannot tell the two apart from the
/// return value alone.
pub fn char_width(encoding: &Encoding, buffer: &[u8]) -> i32 {
    match encoding.decode_prefix(buffer) {
        Some((ch, _)) => display_width(ch),
        None => 0,
    }
}
