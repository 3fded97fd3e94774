//! Pad presentation using crossterm
//!
//! Repaints a pad onto any writer. Raw mode, alternate screen and cursor
//! visibility are the host's lifecycle to manage; this module only emits
//! the positioned character writes.

use std::io::{self, Write};

use crossterm::{cursor::MoveTo, queue, style::Print};

use crate::pad::Pad;

/// Repaint the whole pad to `out`, leaving the terminal cursor at the
/// pad's cursor position.
///
/// Continuation cells are skipped; the terminal advances past them on its
/// own when the wide character is printed.
pub fn present<W: Write>(pad: &Pad, out: &mut W) -> io::Result<()> {
    for row in 0..pad.rows() {
        queue!(out, MoveTo(0, row))?;
        let mut col = 0;
        while col < pad.cols() {
            let Some(cell) = pad.cell(row, col) else {
                break;
            };
            if cell.is_continuation() {
                col += 1;
                continue;
            }
            queue!(out, Print(cell.display_char()))?;
            col += cell.width.max(1) as u16;
        }
    }

    let (cursor_row, cursor_col) = pad.cursor();
    queue!(out, MoveTo(cursor_col, cursor_row))?;
    out.flush()
}
