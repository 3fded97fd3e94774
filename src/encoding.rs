//! Encoding labels and leading-character decoding
//!
//! The bridge never relies on process-wide locale state: the host resolves
//! an [`Encoding`] from a label string once and passes it to every call,
//! so decoding is deterministic and safe to use from parallel tests.

use tracing::debug;

/// Longest encoded form examined when decoding a leading character.
///
/// Sequences needing more bytes than this are treated as undecodable and
/// take the fallback path. Three bytes cover the Basic Multilingual Plane
/// in UTF-8 and every single-byte encoding.
pub const MAX_SEQ_BYTES: usize = 3;

/// A resolved text encoding.
///
/// Built from a label string with [`Encoding::from_label`]. The original
/// label is kept verbatim for diagnostics; decoding behavior is determined
/// by the resolved kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    label: String,
    kind: Kind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Utf8,
    Latin1,
}

impl Default for Encoding {
    fn default() -> Self {
        Self::from_label("utf-8")
    }
}

impl Encoding {
    /// Resolve an encoding from a label.
    ///
    /// Accepts common spellings and Windows codepage aliases. Unknown
    /// labels are not an error: they resolve to UTF-8, and the mismatch is
    /// only visible in the logs.
    pub fn from_label(label: &str) -> Self {
        let kind = match label.to_lowercase().as_str() {
            "utf-8" | "utf8" | "cp65001" | "65001" => Kind::Utf8,
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Kind::Latin1,
            other => {
                debug!("Unknown encoding label: {}, assuming UTF-8", other);
                Kind::Utf8
            }
        };
        Self {
            label: label.to_string(),
            kind,
        }
    }

    /// The label this encoding was resolved from.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Decode the leading character of `bytes`.
    ///
    /// Returns the character and the number of bytes it consumed, or
    /// `None` if the buffer is empty or starts with a malformed or
    /// incomplete sequence. At most [`MAX_SEQ_BYTES`] bytes are examined,
    /// so 4-byte UTF-8 sequences (astral-plane code points) are reported
    /// as undecodable.
    pub fn decode_prefix(&self, bytes: &[u8]) -> Option<(char, usize)> {
        if bytes.is_empty() {
            return None;
        }
        let head = &bytes[..bytes.len().min(MAX_SEQ_BYTES)];
        match self.kind {
            Kind::Utf8 => {
                let need = utf8_seq_len(head[0])?;
                if need > head.len() {
                    return None;
                }
                // from_utf8 rejects bad continuation bytes, overlong forms
                // and surrogates.
                let s = std::str::from_utf8(&head[..need]).ok()?;
                let ch = s.chars().next()?;
                Some((ch, need))
            }
            Kind::Latin1 => Some((head[0] as char, 1)),
        }
    }
}

/// Sequence length implied by a UTF-8 lead byte, or `None` for
/// continuation bytes and invalid leads.
fn utf8_seq_len(lead: u8) -> Option<usize> {
    if lead < 0x80 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}
