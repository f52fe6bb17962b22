//! One cycle of the sample loop
//!
//! Each cycle drives the analog output to the current sweep set point,
//! samples the probe, and calibrates the sample. The set point then
//! steps up by one and wraps at 255, so a probe wired back to the output
//! sees a slow sawtooth.

use tablet_hal::analog::{AnalogError, AnalogInput, AnalogOutput};

use crate::calibration::Calibration;
use crate::message::{moisture_message, Message};

/// Result of one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Output set point in effect while sampling
    pub set_point: u8,
    pub raw: u16,
    pub volts: f32,
    pub percent: u8,
}

impl Reading {
    pub fn message(&self) -> Message {
        moisture_message(self.percent)
    }
}

/// Sweep and calibration state carried between cycles
#[derive(Debug, Clone, Copy)]
pub struct Monitor {
    calibration: Calibration,
    channel: u8,
    set_point: u8,
}

impl Monitor {
    /// Start the sweep at zero on output `channel`
    pub const fn new(calibration: Calibration, channel: u8) -> Self {
        Self {
            calibration,
            channel,
            set_point: 0,
        }
    }

    /// Set point the next cycle will drive
    pub fn set_point(&self) -> u8 {
        self.set_point
    }

    /// Run one cycle
    ///
    /// On error the sweep does not advance, so the next cycle retries the
    /// same set point.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Reading, AnalogError>
    where
        I: AnalogInput,
        O: AnalogOutput,
    {
        output.write_raw(self.channel, self.set_point)?;
        let raw = input.read_raw()?;

        let volts = self.calibration.sample_to_volts(raw);
        let reading = Reading {
            set_point: self.set_point,
            raw,
            volts,
            percent: self.calibration.volts_to_percent(volts),
        };

        self.set_point = self.set_point.wrapping_add(1);
        Ok(reading)
    }
}
