//! widepad - wide-character drawing bridge for terminal text UIs
//!
//! widepad sits between a text UI and its terminal pads: it decodes the
//! leading character of a byte buffer, draws it at the pad cursor, moves
//! the cursor by the character's display width, and hands back the
//! unconsumed bytes. Hosts keep feeding the remainder back in until the
//! buffer is gone.
//!
//! # Features
//!
//! - **Width queries**: [`char_width`] reports terminal columns for the
//!   leading character of a buffer (wcwidth semantics: 0, 1, 2, or -1)
//! - **Single-character writes**: [`write_char`] draws one character,
//!   advances the cursor, and returns the rest of the buffer
//! - **String writes**: [`write_str`] loops the single-character write
//!   over a whole buffer
//! - **Graceful degradation**: malformed byte sequences never error;
//!   width queries report 0 and writes drop one byte without moving the
//!   cursor
//! - **Explicit encodings**: [`Encoding`] is resolved from a label once
//!   and passed per call; no process-global locale state
//! - **Presentation**: [`render::present`] repaints a pad through
//!   crossterm onto any writer
//!
//! # Quick Start
//!
//! ```
//! use widepad::{char_width, write_char, Encoding, Pad};
//!
//! let enc = Encoding::from_label("utf-8");
//! let mut pad = Pad::new(20, 4);
//!
//! let buffer = "あB".as_bytes();
//! assert_eq!(char_width(&enc, buffer), 2);
//!
//! let rest = write_char(Some(&mut pad), &enc, buffer).unwrap();
//! assert_eq!(rest, Some("B".as_bytes()));
//! assert_eq!(pad.cursor(), (0, 2));
//! ```

mod config;
mod encoding;
mod pad;
pub mod render;
mod width;
mod writer;

pub use config::Config;
pub use encoding::{Encoding, MAX_SEQ_BYTES};
pub use pad::{handle_size, Cell, Pad};
pub use width::{char_width, display_width};
pub use writer::{write_char, write_str, BridgeError};
