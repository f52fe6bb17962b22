//! SSD1306 command table
//!
//! Values from the Solomon Systech SSD1306 datasheet, command table 9.

/// Control byte: the rest of the transaction is a command stream
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the rest of the transaction is GDDRAM data
pub const CONTROL_DATA: u8 = 0x40;

// Addressing
pub const SET_MEMORY_ADDR_MODE: u8 = 0x20;
pub const PAGE_ADDR_MODE: u8 = 0x02;
/// Page mode start column, low nibble in bits 0-3
pub const SET_LOWER_COLUMN: u8 = 0x00;
/// Page mode start column, high nibble in bits 0-3
pub const SET_HIGHER_COLUMN: u8 = 0x10;
/// Page mode start page, page index in bits 0-2
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration
pub const SET_CHARGE_PUMP: u8 = 0x8D;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
pub const SET_SEGMENT_REMAP: u8 = 0xA1;
pub const SET_COM_SCAN_DEC: u8 = 0xC8;

// Display
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling
pub const VERTICAL_RIGHT_SCROLL: u8 = 0x29;
pub const VERTICAL_LEFT_SCROLL: u8 = 0x2A;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;
pub const ACTIVATE_SCROLL: u8 = 0x2F;
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
