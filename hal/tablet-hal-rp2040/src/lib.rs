//! RP2040-specific HAL for the moisture monitor
//!
//! This crate provides RP2040 implementations of the shared
//! `tablet-hal` traits on top of `embassy-rp`:
//!
//! - I2C bus adapter with a bounded per-transaction timeout
//! - I2C pin pair validation
//! - ADC channel mapping and a blocking probe input
//! - PWM-backed analog output (the RP2040 has no DAC)

#![no_std]

pub mod adc;
pub mod i2c;
pub mod pwm;

// Re-export shared traits from tablet-hal for convenience
pub use tablet_hal::{AnalogInput, AnalogOutput, I2cBus};
