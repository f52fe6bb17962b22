//! Monitor configuration
//!
//! Values come from `monitor.toml` in the firmware crate. The firmware
//! build script deserializes the file into these types (with the `serde`
//! feature), runs [`MonitorConfig::validate`] and bakes the result into
//! the image as a constant.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tablet_hal::i2c::{Address, I2cConfig, DEFAULT_TIMEOUT_MS};

use crate::calibration::Calibration;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sample period is zero
    InvalidPeriod,
    /// Calibration coefficients unusable
    InvalidCalibration,
    /// Display address, frequency or timeout rejected by the bus layer
    Bus(tablet_hal::ConfigError),
}

impl From<tablet_hal::ConfigError> for ConfigError {
    fn from(e: tablet_hal::ConfigError) -> Self {
        ConfigError::Bus(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPeriod => f.write_str("sample period must be non-zero"),
            ConfigError::InvalidCalibration => f.write_str("invalid calibration coefficients"),
            ConfigError::Bus(e) => write!(f, "bus: {}", e),
        }
    }
}

/// SSD1306 address with SA0 tied low
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x3C;

/// Display bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusSettings {
    /// 7-bit display address
    pub display_address: u8,
    /// Bus clock in Hz
    pub frequency: u32,
    /// Per-transaction timeout in milliseconds
    pub timeout_ms: u32,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            display_address: DEFAULT_DISPLAY_ADDRESS,
            frequency: I2cConfig::FAST,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl BusSettings {
    pub fn address(&self) -> Result<Address, tablet_hal::ConfigError> {
        Address::new(self.display_address)
    }

    /// Bus configuration for the given pins
    pub fn i2c_config(&self, sda_pin: u8, scl_pin: u8) -> I2cConfig {
        I2cConfig {
            sda_pin,
            scl_pin,
            frequency: self.frequency,
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    pub bus: BusSettings,
    /// Delay between samples in milliseconds
    pub sample_period_ms: u32,
    pub calibration: Calibration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            bus: BusSettings::default(),
            sample_period_ms: 20,
            calibration: Calibration::DEFAULT,
        }
    }
}

impl MonitorConfig {
    /// Check everything that does not depend on the board's pins
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bus.address()?;

        // Pins are checked separately against the board; any distinct pair
        // lets the shared frequency and timeout checks run here
        self.bus.i2c_config(0, 1).validate()?;

        if self.sample_period_ms == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        if !self.calibration.is_valid() {
            return Err(ConfigError::InvalidCalibration);
        }
        Ok(())
    }
}
