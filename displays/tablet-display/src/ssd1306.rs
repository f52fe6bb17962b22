//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Text is written straight into display RAM in 8x8 glyphs
//! (16 chars x 8 rows); nothing is buffered on the host side.

use tablet_hal::i2c::{Address, I2cBus, Transaction, DEFAULT_TIMEOUT_MS};

use crate::backend::{DisplayError, TextDisplay};
use crate::cmd;
use crate::font::{GlyphTable, GLYPH_WIDTH};
use crate::layout::{self, RenderCursor, Step, MAX_CHARS_PER_LINE};
use crate::scroll::ScrollConfig;
use crate::{PAGES, WIDTH};

/// Power-up command stream, sent as a single transaction
const INIT_SEQUENCE: [u8; 10] = [
    cmd::SET_MEMORY_ADDR_MODE,
    cmd::PAGE_ADDR_MODE,
    cmd::SET_LOWER_COLUMN,
    cmd::SET_HIGHER_COLUMN,
    cmd::SET_PAGE_START,
    cmd::SET_CHARGE_PUMP,
    cmd::CHARGE_PUMP_ENABLE,
    cmd::SET_SEGMENT_REMAP, // Flip horizontally
    cmd::SET_COM_SCAN_DEC,  // Flip vertically
    cmd::DISPLAY_ON,
];

/// Memory addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddrMode {
    /// Column pointer wraps within the current page
    Page,
}

/// Where the controller will put the next data byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressingState {
    mode: AddrMode,
    page: u8,
    column: u8,
    start_column: u8,
}

impl AddressingState {
    const fn home() -> Self {
        Self {
            mode: AddrMode::Page,
            page: 0,
            column: 0,
            start_column: 0,
        }
    }

    pub fn mode(&self) -> AddrMode {
        self.mode
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Follow the controller's auto-increment over `len` data bytes
    ///
    /// At the last column the pointer returns to the start column of the
    /// same page.
    fn advance(&mut self, len: usize) {
        let start = self.start_column as usize;
        let span = WIDTH - start;
        let offset = (self.column as usize - start + len) % span;
        self.column = (start + offset) as u8;
    }
}

/// SSD1306 OLED driver
pub struct Ssd1306<B> {
    bus: B,
    address: Address,
    timeout_ms: u32,
    glyphs: GlyphTable,
    state: AddressingState,
    initialized: bool,
}

impl<B: I2cBus> Ssd1306<B> {
    /// Create a new SSD1306 driver
    ///
    /// Nothing is sent until [`Ssd1306::init`].
    pub fn new(bus: B, address: Address) -> Self {
        Self {
            bus,
            address,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            glyphs: GlyphTable::new(),
            state: AddressingState::home(),
            initialized: false,
        }
    }

    /// Per-transaction timeout
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    pub fn state(&self) -> AddressingState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize the display
    ///
    /// Page addressing, cursor at the origin, charge pump on, both axes
    /// remapped, panel on. On failure the panel stays dark and nothing
    /// else is sent; call again to retry.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.initialized = false;
        self.command(&INIT_SEQUENCE)?;
        self.state = AddressingState::home();
        self.initialized = true;
        Ok(())
    }

    /// Zero every page
    ///
    /// Per page: the row pointer `0xB0 | page`, then a 128-byte zero row.
    /// A full row wraps back to its starting column, so the column is
    /// left alone unless an earlier `set_cursor` narrowed the wrap window;
    /// then page 0's pointer also resets the start column to 0. Leaves
    /// the pointer on the last page.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        const BLANK_ROW: [u8; WIDTH] = [0; WIDTH];

        for page in 0..PAGES as u8 {
            if self.state.start_column != 0 {
                self.set_cursor(page, 0)?;
            } else {
                self.set_page(page)?;
            }
            self.write_row(&BLANK_ROW)?;
        }
        Ok(())
    }

    /// Position the page/column pointer
    pub fn set_cursor(&mut self, page: u8, column: u8) -> Result<(), DisplayError> {
        if page as usize >= PAGES || column as usize >= WIDTH {
            return Err(DisplayError::OutOfRange);
        }

        self.command(&[
            cmd::SET_LOWER_COLUMN | (column & 0x0F),
            cmd::SET_HIGHER_COLUMN | (column >> 4),
            cmd::SET_PAGE_START | page,
        ])?;

        self.state.page = page;
        self.state.column = column;
        self.state.start_column = column;
        Ok(())
    }

    /// Move the row pointer; the column pointer stays where it is
    fn set_page(&mut self, page: u8) -> Result<(), DisplayError> {
        self.command(&[cmd::SET_PAGE_START | page])?;
        self.state.page = page;
        Ok(())
    }

    /// Write raw column bytes at the cursor
    pub fn write_row(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.len() > WIDTH {
            return Err(DisplayError::OutOfRange);
        }
        self.data(data)
    }

    /// Draw one glyph at the cursor
    pub fn render_char(&mut self, code: u8) -> Result<(), DisplayError> {
        let glyph = *self.glyphs.glyph(code);
        self.data(&glyph)
    }

    /// Draw text starting at column 0 of the current page
    ///
    /// At most [`MAX_CHARS_PER_LINE`] glyphs are drawn per line. Fails
    /// with `OutOfRange` before sending anything if the newlines would
    /// run past the last page.
    pub fn render_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.render_from(self.state.page, text)
    }

    /// Start continuous vertical and horizontal scrolling
    pub fn set_scroll(&mut self, config: &ScrollConfig) -> Result<(), DisplayError> {
        config.validate()?;
        self.command(&config.commands())
    }

    /// Stop scrolling; display RAM must be rewritten afterwards
    pub fn stop_scroll(&mut self) -> Result<(), DisplayError> {
        self.command(&[cmd::DEACTIVATE_SCROLL])
    }

    fn render_from(&mut self, page: u8, text: &str) -> Result<(), DisplayError> {
        if layout::final_page(page, text) >= PAGES {
            return Err(DisplayError::OutOfRange);
        }

        self.set_cursor(page, 0)?;

        let mut cursor = RenderCursor::new(page);
        for ch in text.chars() {
            match cursor.advance(ch) {
                Step::NextLine { page } => self.set_cursor(page, 0)?,
                Step::Glyph(code) => self.render_char(code)?,
                Step::Drop => {}
            }
        }
        Ok(())
    }

    /// Send a command stream
    fn command(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        let tx = Transaction::write(self.address)
            .byte(cmd::CONTROL_COMMAND)?
            .bytes(cmds)?;
        self.bus.submit(tx, self.timeout_ms)?;
        Ok(())
    }

    /// Send display RAM data at the cursor
    fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        let tx = Transaction::write(self.address)
            .byte(cmd::CONTROL_DATA)?
            .bytes(data)?;
        self.bus.submit(tx, self.timeout_ms)?;
        self.state.advance(data.len());
        Ok(())
    }
}

impl<B: I2cBus> TextDisplay for Ssd1306<B> {
    fn initialize(&mut self) -> Result<(), DisplayError> {
        self.init()
    }

    fn display_clear(&mut self) -> Result<(), DisplayError> {
        self.clear()
    }

    fn display_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.render_from(0, text)
    }

    fn display_scroll(&mut self, config: &ScrollConfig) -> Result<(), DisplayError> {
        self.set_scroll(config)
    }

    fn dimensions(&self) -> (u8, u8) {
        (MAX_CHARS_PER_LINE, PAGES as u8)
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }
}

const _: () = assert!(WIDTH / GLYPH_WIDTH == MAX_CHARS_PER_LINE as usize);
