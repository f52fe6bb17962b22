//! Probe input on the RP2040 ADC
//!
//! The 12-bit ADC is muxed onto GPIO26-29 (ADC0-ADC3); the fifth input
//! is the internal temperature sensor, which the monitor does not use.

use embassy_rp::adc::{Adc, Blocking, Channel};

use tablet_hal::analog::{AnalogError, AnalogInput};

/// External ADC input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// GPIO26
    Adc0,
    /// GPIO27
    Adc1,
    /// GPIO28
    Adc2,
    /// GPIO29
    Adc3,
}

impl AdcChannel {
    /// Input muxed onto `gpio`, if any
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// Probe input: one ADC channel read in blocking mode
pub struct ProbeInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> ProbeInput<'d> {
    /// Bind a channel to the converter
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for ProbeInput<'_> {
    fn read_raw(&mut self) -> Result<u16, AnalogError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AnalogError::Conversion)
    }
}
