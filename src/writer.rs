//! Single-character writes
//!
//! The write path of the bridge: take a byte buffer that begins with one
//! encoded character, draw that character on a pad at its cursor, advance
//! the cursor by the character's display width, and hand back the
//! unconsumed remainder.

use thiserror::Error;
use tracing::trace;

use crate::encoding::Encoding;
use crate::pad::Pad;
use crate::width::display_width;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Write the leading character of `buffer` to `pad` and return the
/// remainder of the buffer.
///
/// With `pad == None` the call is a deliberate no-op and returns
/// `Ok(None)`, a "no result" distinct from an empty remainder.
///
/// Otherwise the first byte decides the path:
/// - a byte `<= 0x7F` is written as-is and the cursor moves one column
///   right;
/// - a byte `> 0x7F` starts a multi-byte decode. On success the decoded
///   character is written and the cursor column moves by the character's
///   display width (backwards for a non-printable, clamped at the pad
///   edges). On failure exactly one byte is dropped and the cursor does
///   not move; a failed decode degrades silently instead of erroring.
///
/// The cursor row never changes. An empty buffer is the one malformed
/// call shape the signature cannot rule out and yields
/// [`BridgeError::InvalidArgument`] before any pad interaction.
pub fn write_char<'a>(
    pad: Option<&mut Pad>,
    encoding: &Encoding,
    buffer: &'a [u8],
) -> Result<Option<&'a [u8]>> {
    if buffer.is_empty() {
        return Err(BridgeError::InvalidArgument(
            "buffer must contain at least one byte",
        ));
    }
    let Some(pad) = pad else {
        return Ok(None);
    };

    let (row, col) = pad.cursor();

    if buffer[0] <= 0x7F {
        pad.put_ascii(buffer[0]);
        pad.move_to(row, col.saturating_add(1));
        return Ok(Some(&buffer[1..]));
    }

    match encoding.decode_prefix(buffer) {
        Some((ch, used)) => {
            pad.put_wide(ch);
            let new_col = col.saturating_add_signed(display_width(ch) as i16);
            pad.move_to(row, new_col);
            Ok(Some(&buffer[used..]))
        }
        None => {
            trace!("Dropping undecodable byte {:#04x}", buffer[0]);
            Ok(Some(&buffer[1..]))
        }
    }
}

/// Write a whole buffer one character at a time.
///
/// Loops [`write_char`] until the buffer is exhausted and returns the
/// number of characters actually drawn. Undecodable bytes are dropped one
/// at a time, exactly as `write_char` drops them, and do not count.
/// An empty buffer is a no-op.
pub fn write_str(pad: &mut Pad, encoding: &Encoding, buffer: &[u8]) -> Result<usize> {
    let mut rest = buffer;
    let mut written = 0;
    while !rest.is_empty() {
        let dropped = rest[0] > 0x7F && encoding.decode_prefix(rest).is_none();
        match write_char(Some(&mut *pad), encoding, rest)? {
            Some(remainder) => rest = remainder,
            // Unreachable with a pad supplied; bail rather than spin.
            None => break,
        }
        if !dropped {
            written += 1;
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8() -> Encoding {
        Encoding::default()
    }

    #[test]
    fn test_ascii_advances_one() {
        let mut pad = Pad::new(20, 2);
        let rest = write_char(Some(&mut pad), &utf8(), b"Abc").unwrap();
        assert_eq!(rest, Some(&b"bc"[..]));
        assert_eq!(pad.cursor(), (0, 1));
        assert_eq!(pad.cell(0, 0).unwrap().grapheme, "A");
    }

    #[test]
    fn test_wide_advances_two() {
        let mut pad = Pad::new(20, 2);
        let buffer = "中rest".as_bytes();
        let rest = write_char(Some(&mut pad), &utf8(), buffer).unwrap();
        // 中 occupies three bytes and two columns.
        assert_eq!(rest, Some(&buffer[3..]));
        assert_eq!(rest.unwrap(), b"rest");
        assert_eq!(pad.cursor(), (0, 2));
    }

    #[test]
    fn test_narrow_multibyte_advances_one() {
        let mut pad = Pad::new(20, 2);
        let buffer = "éx".as_bytes();
        let rest = write_char(Some(&mut pad), &utf8(), buffer).unwrap();
        assert_eq!(rest, Some(&b"x"[..]));
        assert_eq!(pad.cursor(), (0, 1));
    }

    #[test]
    fn test_malformed_drops_byte_without_moving() {
        let mut pad = Pad::new(20, 2);
        pad.move_to(0, 5);
        let buffer: &[u8] = &[0xA9, b'r', b'e', b's', b't'];
        let rest = write_char(Some(&mut pad), &utf8(), buffer).unwrap();
        assert_eq!(rest, Some(&b"rest"[..]));
        assert_eq!(pad.cursor(), (0, 5));
        // Nothing was drawn.
        assert_eq!(pad.cell(0, 5).unwrap().grapheme, "");
    }

    #[test]
    fn test_no_pad_is_noop() {
        let rest = write_char(None, &utf8(), b"anything").unwrap();
        assert_eq!(rest, None);
    }

    #[test]
    fn test_empty_buffer_is_invalid() {
        let mut pad = Pad::new(20, 2);
        let err = write_char(Some(&mut pad), &utf8(), b"").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArgument(_)));
        assert_eq!(pad.cursor(), (0, 0));
    }

    #[test]
    fn test_row_is_preserved() {
        let mut pad = Pad::new(20, 4);
        pad.move_to(2, 3);
        write_char(Some(&mut pad), &utf8(), b"Q").unwrap();
        assert_eq!(pad.cursor(), (2, 4));
    }

    #[test]
    fn test_nonprintable_steps_back() {
        let mut pad = Pad::new(20, 2);
        pad.move_to(0, 5);
        // U+0081 is a C1 control: decodes fine, width -1.
        let rest = write_char(Some(&mut pad), &utf8(), "\u{0081}z".as_bytes()).unwrap();
        assert_eq!(rest, Some(&b"z"[..]));
        assert_eq!(pad.cursor(), (0, 4));
    }

    #[test]
    fn test_round_trip_consumes_buffer() {
        let mut pad = Pad::new(40, 2);
        let enc = utf8();
        // ASCII + wide + narrow multibyte, with one stray continuation
        // byte in the middle.
        let mut buffer = Vec::new();
        buffer.extend_from_slice(b"ab");
        buffer.extend_from_slice("中".as_bytes());
        buffer.push(0xA9);
        buffer.extend_from_slice("é!".as_bytes());

        let mut rest: &[u8] = &buffer;
        let mut calls = 0;
        while !rest.is_empty() {
            rest = write_char(Some(&mut pad), &enc, rest).unwrap().unwrap();
            calls += 1;
        }
        // Five decodable characters plus one dropped byte.
        assert_eq!(calls, 6);
        // Columns: 1 + 1 + 2 + 0 + 1 + 1.
        assert_eq!(pad.cursor(), (0, 6));
        assert_eq!(pad.row_text(0).trim_end(), "ab中é!");
    }

    #[test]
    fn test_write_str_counts_characters() {
        let mut pad = Pad::new(40, 2);
        let enc = utf8();
        let mut buffer = Vec::new();
        buffer.extend_from_slice("a中".as_bytes());
        buffer.push(0xFF);
        buffer.push(b'z');

        let written = write_str(&mut pad, &enc, &buffer).unwrap();
        assert_eq!(written, 3);
        assert_eq!(pad.cursor(), (0, 4));
        assert_eq!(pad.row_text(0).trim_end(), "a中z");
    }

    #[test]
    fn test_write_str_empty_is_noop() {
        let mut pad = Pad::new(10, 1);
        assert_eq!(write_str(&mut pad, &utf8(), b"").unwrap(), 0);
        assert_eq!(pad.cursor(), (0, 0));
    }
}
