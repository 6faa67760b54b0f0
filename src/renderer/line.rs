//! Single-line renderer for typed text.
//!
//! Draws text at a fixed terminal position. Revealed text only grows during a
//! run, but a reset can shrink it, so cells left over from the previous frame
//! are blanked.
//!
//! # Algorithm
//!
//! 1. Move to the anchor cell
//! 2. Debug mode: draw the left frame marker
//! 3. Apply color and attributes, print the text, reset styling
//! 4. Debug mode: draw the right frame marker right after the text
//! 5. Pad with spaces over whatever the previous frame drew beyond that
//! 6. Flush (single syscall)
//!
//! Everything after the anchor is printed in sequence, so no cell position
//! is computed past the anchor column.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::primitives::TypedText;
use crate::types::{Attr, Rgba};

const FRAME_LEFT: &str = "[";
const FRAME_RIGHT: &str = "]";

/// Renders one line of text at a fixed position.
pub struct LineRenderer {
    column: u16,
    row: u16,
    debug: bool,
    /// Cells drawn by the previous frame, frame markers included.
    previous_width: usize,
}

impl LineRenderer {
    /// Create a renderer anchored at `column`, `row` (0-based).
    ///
    /// The anchor must be addressable by an ANSI cursor move, so both values
    /// stay below `u16::MAX`.
    pub fn new(column: u16, row: u16) -> Self {
        Self {
            column: column.min(u16::MAX - 1),
            row: row.min(u16::MAX - 1),
            debug: false,
            previous_width: 0,
        }
    }

    /// Frame the text with red markers.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Render `text` with the given styling.
    pub fn render<W: Write>(&mut self, out: &mut W, text: &str, attrs: Attr, fg: Rgba) -> io::Result<()> {
        self.draw(out, text, attrs, fg, self.debug)
    }

    /// Render the current content of a typed text component.
    ///
    /// The text is framed when either the renderer or the component is in
    /// debug mode.
    pub fn render_typed<W: Write>(&mut self, out: &mut W, typed: &TypedText) -> Result<()> {
        let content = typed.content().get();
        let debug = self.debug || typed.debug();
        self.draw(out, &content, typed.attrs(), typed.fg(), debug)?;
        Ok(())
    }

    /// Forget the previous frame (after the screen was cleared).
    pub fn invalidate(&mut self) {
        self.previous_width = 0;
    }

    fn draw<W: Write>(&mut self, out: &mut W, text: &str, attrs: Attr, fg: Rgba, debug: bool) -> io::Result<()> {
        queue!(out, MoveTo(self.column, self.row))?;

        if debug {
            queue!(out, SetForegroundColor(Color::Red), Print(FRAME_LEFT), ResetColor)?;
        }

        queue!(out, SetForegroundColor(fg.to_crossterm()))?;
        for attribute in attrs.to_crossterm() {
            queue!(out, SetAttribute(attribute))?;
        }
        queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;

        if debug {
            queue!(out, SetForegroundColor(Color::Red), Print(FRAME_RIGHT), ResetColor)?;
        }

        let frame_width = if debug { FRAME_LEFT.width() + FRAME_RIGHT.width() } else { 0 };
        let drawn = text.width() + frame_width;
        if drawn < self.previous_width {
            queue!(out, Print(" ".repeat(self.previous_width - drawn)))?;
        }

        self.previous_width = drawn;
        out.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{typed_text, TypedTextProps};
    use crate::typewriter::Speed;

    /// Replay ANSI output onto one row of cells. Handles cursor moves and
    /// skips styling sequences.
    fn replay(row: &mut Vec<char>, output: &str) {
        let mut column = 0usize;
        let mut chars = output.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                chars.next();
                let mut params = String::new();
                let mut final_byte = ' ';
                for p in chars.by_ref() {
                    if p.is_ascii_alphabetic() {
                        final_byte = p;
                        break;
                    }
                    params.push(p);
                }
                if final_byte == 'H' {
                    column = params
                        .split(';')
                        .nth(1)
                        .and_then(|col| col.parse::<usize>().ok())
                        .unwrap_or(1)
                        - 1;
                }
            } else {
                if row.len() <= column {
                    row.resize(column + 1, ' ');
                }
                row[column] = c;
                column += 1;
            }
        }
    }

    fn screen(row: &[char]) -> String {
        row.iter().collect::<String>().trim_end().to_string()
    }

    fn render_to_string(renderer: &mut LineRenderer, text: &str) -> String {
        let mut out = Vec::new();
        renderer.render(&mut out, text, Attr::NONE, Rgba::TERMINAL_DEFAULT).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_prints_text_at_anchor() {
        let mut renderer = LineRenderer::new(4, 2);
        let output = render_to_string(&mut renderer, "Hello");

        // MoveTo is 1-based in ANSI: row 3, column 5
        assert!(output.starts_with("\x1b[3;5H"));
        assert!(output.contains("Hello"));
    }

    #[test]
    fn test_render_applies_attrs() {
        let mut renderer = LineRenderer::new(0, 0);
        let mut out = Vec::new();
        renderer.render(&mut out, "x", Attr::BOLD, Rgba::AMBER).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("\x1b[1m"));
        assert!(output.contains("38;2;255;176;0"));
    }

    #[test]
    fn test_shrinking_text_is_blanked() {
        let mut renderer = LineRenderer::new(0, 0);
        render_to_string(&mut renderer, "Hello");
        let output = render_to_string(&mut renderer, "He");

        assert!(output.contains("   "));
    }

    #[test]
    fn test_growing_text_is_not_padded() {
        let mut renderer = LineRenderer::new(0, 0);
        render_to_string(&mut renderer, "He");
        let output = render_to_string(&mut renderer, "Hello");

        assert!(!output.contains("  "));
    }

    #[test]
    fn test_invalidate_skips_padding() {
        let mut renderer = LineRenderer::new(0, 0);
        render_to_string(&mut renderer, "Hello");
        renderer.invalidate();
        let output = render_to_string(&mut renderer, "He");

        assert!(!output.contains("  "));
    }

    #[test]
    fn test_debug_frame() {
        let mut renderer = LineRenderer::new(0, 0).with_debug(true);
        let mut row = Vec::new();
        replay(&mut row, &render_to_string(&mut renderer, "ab"));

        assert_eq!(screen(&row), "[ab]");
    }

    #[test]
    fn test_shrinking_screen_has_no_leftovers() {
        let mut renderer = LineRenderer::new(0, 0);
        let mut row = Vec::new();
        replay(&mut row, &render_to_string(&mut renderer, "Hello"));
        replay(&mut row, &render_to_string(&mut renderer, "He"));

        assert_eq!(screen(&row), "He");
    }

    #[test]
    fn test_shrinking_debug_frame_has_no_leftovers() {
        let mut renderer = LineRenderer::new(0, 0).with_debug(true);
        let mut row = Vec::new();
        replay(&mut row, &render_to_string(&mut renderer, "Hello"));
        assert_eq!(screen(&row), "[Hello]");

        replay(&mut row, &render_to_string(&mut renderer, "He"));
        assert_eq!(screen(&row), "[He]");
    }

    #[test]
    fn test_anchor_at_last_column() {
        // Frame and text run past the anchor without any column arithmetic
        let mut renderer = LineRenderer::new(u16::MAX - 1, 0).with_debug(true);
        let output = render_to_string(&mut renderer, "wide text");

        assert!(output.starts_with("\x1b[1;65535H"));
        assert!(output.contains(FRAME_RIGHT));
        assert!(output.contains("wide text"));
    }

    #[test]
    fn test_anchor_is_clamped() {
        let mut renderer = LineRenderer::new(u16::MAX, u16::MAX);
        let output = render_to_string(&mut renderer, "x");

        assert!(output.starts_with("\x1b[65535;65535H"));
    }

    #[test]
    fn test_render_typed_frames_debug_component() {
        let mut typed = typed_text(TypedTextProps {
            message: "ok".into(),
            speed: Speed::VeryFast,
            debug: true,
            ..Default::default()
        })
        .unwrap();
        typed.tick();

        let mut renderer = LineRenderer::new(0, 0);
        let mut out = Vec::new();
        renderer.render_typed(&mut out, &typed).unwrap();
        let mut row = Vec::new();
        replay(&mut row, &String::from_utf8(out).unwrap());

        assert_eq!(screen(&row), "[o]");
    }

    #[test]
    fn test_render_typed() {
        let mut typed = typed_text(TypedTextProps {
            message: "ok".into(),
            speed: Speed::VeryFast,
            ..Default::default()
        })
        .unwrap();
        typed.tick();

        let mut renderer = LineRenderer::new(0, 0);
        let mut out = Vec::new();
        renderer.render_typed(&mut out, &typed).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains('o'));
        assert!(!output.contains("ok"));
    }
}
