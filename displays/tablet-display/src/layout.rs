//! Text layout state machine
//!
//! Scans a string one character at a time and decides, for each
//! character, whether the driver moves to the next page, draws a glyph,
//! or drops the character because the line is already full.

use crate::font::GlyphTable;

/// Characters that fit on one page (128 columns / 8 columns per glyph)
pub const MAX_CHARS_PER_LINE: u8 = 16;

/// Where the cursor is within the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineState {
    /// Nothing written on this line yet
    AtLineStart,
    /// Some glyphs written, room for more
    MidLine,
    /// Line is full; everything up to the next newline is dropped
    OverflowSuppressed,
}

/// What the driver must do for one input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Position the controller at column 0 of `page`
    NextLine { page: u8 },
    /// Draw the glyph for this table code
    Glyph(u8),
    /// Character falls past the end of the line
    Drop,
}

/// Cursor for a single text render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCursor {
    page: u8,
    written: u8,
    state: LineState,
}

impl RenderCursor {
    /// Start at the beginning of `page`
    pub const fn new(page: u8) -> Self {
        Self {
            page,
            written: 0,
            state: LineState::AtLineStart,
        }
    }

    /// Feed one character
    pub fn advance(&mut self, ch: char) -> Step {
        if ch == '\n' {
            self.page = self.page.saturating_add(1);
            self.written = 0;
            self.state = LineState::AtLineStart;
            return Step::NextLine { page: self.page };
        }

        if self.state == LineState::OverflowSuppressed {
            return Step::Drop;
        }

        self.written += 1;
        self.state = if self.written >= MAX_CHARS_PER_LINE {
            LineState::OverflowSuppressed
        } else {
            LineState::MidLine
        };
        Step::Glyph(GlyphTable::code_for(ch))
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    /// Glyphs written on the current line
    pub fn written(&self) -> u8 {
        self.written
    }

    pub fn state(&self) -> LineState {
        self.state
    }
}

/// Page the cursor ends on after rendering `text` from `start_page`
pub fn final_page(start_page: u8, text: &str) -> usize {
    start_page as usize + text.chars().filter(|&c| c == '\n').count()
}
