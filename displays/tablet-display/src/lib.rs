//! SSD1306 text driver for the moisture monitor
//!
//! This crate provides:
//! - [`Ssd1306`], a bufferless driver for 128x64 SSD1306 panels on I2C
//! - [`GlyphTable`], the 8x8 font in controller column format
//! - [`RenderCursor`], the per-call text layout state machine
//! - [`ScrollConfig`] for the controller's hardware scrolling
//! - [`TextDisplay`], the interface the firmware renders through
//!
//! # Protocol
//!
//! Every bus transaction starts with a control byte: `0x00` means the
//! remaining bytes are commands, `0x40` means they are display RAM data.
//! The two cannot be mixed in one transaction, so positioning the cursor
//! and writing a row always take two.
//!
//! ```text
//! display_text ─► RenderCursor ─► render_char ─► Transaction ─► I2cBus
//!                      │
//!                      └─► set_cursor (on '\n')
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod cmd;
pub mod font;
pub mod layout;
pub mod scroll;
pub mod ssd1306;

#[cfg(test)]
mod sim;

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// 8-row pages
pub const PAGES: usize = HEIGHT / 8;

// Re-export key types
pub use backend::{DisplayError, TextDisplay};
pub use font::{Glyph, GlyphTable};
pub use layout::{LineState, RenderCursor, Step, MAX_CHARS_PER_LINE};
pub use scroll::{ScrollConfig, ScrollDirection, ScrollInterval};
pub use ssd1306::{AddrMode, AddressingState, Ssd1306};
