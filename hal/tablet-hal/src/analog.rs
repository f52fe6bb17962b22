//! Analog input and output abstractions
//!
//! The monitor samples its probe through an ADC and drives a test
//! voltage through an 8-bit analog output. Both are reduced to raw
//! integers here; conversion to physical units happens in `tablet-core`.

use core::fmt;

/// Full-scale count of a 12-bit converter
pub const ADC_MAX_COUNT: u16 = 4095;

/// Errors from analog peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogError {
    /// Conversion did not produce a sample
    Conversion,
    /// Channel does not exist on this device
    InvalidChannel,
}

impl fmt::Display for AnalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalogError::Conversion => f.write_str("analog conversion failed"),
            AnalogError::InvalidChannel => f.write_str("no such analog channel"),
        }
    }
}

/// Analog input channel
pub trait AnalogInput {
    /// Read one raw sample in `0..=ADC_MAX_COUNT`
    ///
    /// Takes `&mut self` because conversions typically require mutable access.
    fn read_raw(&mut self) -> Result<u16, AnalogError>;
}

/// Analog output with one or more channels
pub trait AnalogOutput {
    /// Drive `channel` to the 8-bit set point `value`
    fn write_raw(&mut self, channel: u8, value: u8) -> Result<(), AnalogError>;
}
