//! Continuous vertical + horizontal scroll configuration

use crate::backend::DisplayError;
use crate::cmd;
use crate::{HEIGHT, PAGES};

/// Horizontal component of the scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    #[default]
    Right,
    Left,
}

/// Frames between scroll steps
///
/// Discriminants are the controller's 3-bit interval codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollInterval {
    Frames5 = 0b000,
    Frames64 = 0b001,
    Frames128 = 0b010,
    Frames256 = 0b011,
    Frames3 = 0b100,
    Frames4 = 0b101,
    Frames25 = 0b110,
    Frames2 = 0b111,
}

/// Scroll region setup
///
/// Pages `start_page..=end_page` scroll horizontally. Of the 64 rows,
/// the first `fixed_rows` stay put and the next `scroll_rows` also
/// scroll vertically by `vertical_offset` rows per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    pub direction: ScrollDirection,
    pub start_page: u8,
    pub end_page: u8,
    pub interval: ScrollInterval,
    pub vertical_offset: u8,
    pub fixed_rows: u8,
    pub scroll_rows: u8,
}

impl Default for ScrollConfig {
    /// Page 0 static, pages 1-7 scroll right, the bottom half also
    /// scrolls up one row per step
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Right,
            start_page: 1,
            end_page: 7,
            interval: ScrollInterval::Frames25,
            vertical_offset: 1,
            fixed_rows: 32,
            scroll_rows: 32,
        }
    }
}

impl ScrollConfig {
    /// Number of command bytes produced by [`ScrollConfig::commands`]
    pub const COMMAND_LEN: usize = 11;

    /// Check the fields against the controller's limits
    pub fn validate(&self) -> Result<(), DisplayError> {
        let pages = PAGES as u8;
        if self.start_page >= pages || self.end_page >= pages || self.start_page > self.end_page {
            return Err(DisplayError::OutOfRange);
        }
        if self.vertical_offset >= HEIGHT as u8 {
            return Err(DisplayError::OutOfRange);
        }
        if self.fixed_rows as usize + self.scroll_rows as usize > HEIGHT {
            return Err(DisplayError::OutOfRange);
        }
        Ok(())
    }

    /// Full command stream: stop, configure, set area, start
    pub fn commands(&self) -> [u8; Self::COMMAND_LEN] {
        let setup = match self.direction {
            ScrollDirection::Right => cmd::VERTICAL_RIGHT_SCROLL,
            ScrollDirection::Left => cmd::VERTICAL_LEFT_SCROLL,
        };
        [
            cmd::DEACTIVATE_SCROLL,
            setup,
            0x00, // dummy
            self.start_page,
            self.interval as u8,
            self.end_page,
            self.vertical_offset,
            cmd::SET_VERTICAL_SCROLL_AREA,
            self.fixed_rows,
            self.scroll_rows,
            cmd::ACTIVATE_SCROLL,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_stream() {
        let config = ScrollConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.commands(),
            [0x2E, 0x29, 0x00, 0x01, 0x06, 0x07, 0x01, 0xA3, 0x20, 0x20, 0x2F]
        );
    }

    #[test]
    fn test_left_scroll() {
        let config = ScrollConfig {
            direction: ScrollDirection::Left,
            interval: ScrollInterval::Frames2,
            ..ScrollConfig::default()
        };
        let commands = config.commands();
        assert_eq!(commands[1], 0x2A);
        assert_eq!(commands[4], 0x07);
    }

    #[test]
    fn test_validation() {
        let base = ScrollConfig::default();

        let bad_page = ScrollConfig { end_page: 8, ..base };
        assert_eq!(bad_page.validate(), Err(DisplayError::OutOfRange));

        let reversed = ScrollConfig { start_page: 5, end_page: 2, ..base };
        assert_eq!(reversed.validate(), Err(DisplayError::OutOfRange));

        let bad_offset = ScrollConfig { vertical_offset: 64, ..base };
        assert_eq!(bad_offset.validate(), Err(DisplayError::OutOfRange));

        let bad_area = ScrollConfig { fixed_rows: 40, scroll_rows: 32, ..base };
        assert_eq!(bad_area.validate(), Err(DisplayError::OutOfRange));

        let whole_screen = ScrollConfig { start_page: 0, fixed_rows: 0, scroll_rows: 64, ..base };
        assert!(whole_screen.validate().is_ok());
    }
}
