//! PWM-backed analog output
//!
//! The RP2040 has no DAC, so the 8-bit analog output is a PWM slice with
//! `top = 255`; an external RC filter turns the duty cycle into a voltage.
//! Channel 0 is the slice's A output, channel 1 its B output.

use embassy_rp::pwm::{Config, Pwm};

use tablet_hal::analog::{AnalogError, AnalogOutput};

/// Number of PWM slices
const SLICES: u8 = 8;

/// Slice output within a PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmOutput {
    A,
    B,
}

/// PWM slice and output driven by a GPIO
///
/// GPIO n belongs to slice `(n / 2) % 8`; even pins are output A.
pub fn pwm_slot(gpio: u8) -> Option<(u8, PwmOutput)> {
    if gpio > 29 {
        return None;
    }
    let slice = (gpio / 2) % SLICES;
    let output = if gpio % 2 == 0 { PwmOutput::A } else { PwmOutput::B };
    Some((slice, output))
}

/// 8-bit analog output on one PWM slice
pub struct PwmDac<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmDac<'d> {
    /// Counter wraps after 256 counts so a set point maps 1:1 to duty
    pub const TOP: u16 = 255;

    /// Configuration to create the slice with: running, output low
    pub fn initial_config() -> Config {
        let mut config = Config::default();
        config.top = Self::TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        config
    }

    /// Take a slice created with [`PwmDac::initial_config`]
    pub fn new(pwm: Pwm<'d>) -> Self {
        Self {
            pwm,
            config: Self::initial_config(),
        }
    }
}

impl AnalogOutput for PwmDac<'_> {
    fn write_raw(&mut self, channel: u8, value: u8) -> Result<(), AnalogError> {
        match channel {
            0 => self.config.compare_a = value as u16,
            1 => self.config.compare_b = value as u16,
            _ => return Err(AnalogError::InvalidChannel),
        }
        self.pwm.set_config(&self.config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwm_slot() {
        assert_eq!(pwm_slot(0), Some((0, PwmOutput::A)));
        assert_eq!(pwm_slot(16), Some((0, PwmOutput::A)));
        assert_eq!(pwm_slot(17), Some((0, PwmOutput::B)));
        assert_eq!(pwm_slot(29), Some((6, PwmOutput::B)));
        assert_eq!(pwm_slot(30), None);
    }
}
