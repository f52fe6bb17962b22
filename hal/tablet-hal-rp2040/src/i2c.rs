//! I2C bus driver for RP2040
//!
//! Wraps an embassy-rp async I2C peripheral behind the blocking
//! [`I2cBus`] trait. Every transaction is polled against an
//! [`Instant`] deadline, so a wedged peripheral costs at most
//! `timeout_ms`. No `embassy_time::Timer` is involved: the executor's
//! timer queue only accepts wakers it created itself.

use embassy_rp::i2c::{self, Async, I2c, Instance};
use embassy_time::{Duration, Instant};
use embedded_hal::i2c::Error as _;

use tablet_hal::i2c::{BusError, ConfigError, I2cBus, I2cConfig, Transaction};
use tablet_hal::poll::poll_until;

/// Highest GPIO number on the RP2040
const MAX_GPIO: u8 = 29;

/// The two I2C controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBlock {
    /// I2C0: SDA on GPIO 0, 4, 8, ... and SCL on GPIO 1, 5, 9, ...
    I2c0,
    /// I2C1: SDA on GPIO 2, 6, 10, ... and SCL on GPIO 3, 7, 11, ...
    I2c1,
}

impl I2cBlock {
    /// Controller whose SDA function is on `gpio`
    pub fn for_sda(gpio: u8) -> Option<Self> {
        match (gpio <= MAX_GPIO).then_some(gpio % 4) {
            Some(0) => Some(I2cBlock::I2c0),
            Some(2) => Some(I2cBlock::I2c1),
            _ => None,
        }
    }

    /// Controller whose SCL function is on `gpio`
    pub fn for_scl(gpio: u8) -> Option<Self> {
        match (gpio <= MAX_GPIO).then_some(gpio % 4) {
            Some(1) => Some(I2cBlock::I2c0),
            Some(3) => Some(I2cBlock::I2c1),
            _ => None,
        }
    }
}

/// Validate a bus configuration against the RP2040 pin mux
///
/// Returns the controller both pins belong to, together with the
/// embassy-rp configuration to build it with.
pub fn configure(config: &I2cConfig) -> Result<(I2cBlock, i2c::Config), ConfigError> {
    config.validate()?;

    let block = match (I2cBlock::for_sda(config.sda_pin), I2cBlock::for_scl(config.scl_pin)) {
        (Some(sda), Some(scl)) if sda == scl => sda,
        _ => return Err(ConfigError::InvalidPins),
    };

    let mut rp_config = i2c::Config::default();
    rp_config.frequency = config.frequency;

    Ok((block, rp_config))
}

/// Blocking bus adapter over an async embassy-rp I2C driver
pub struct Rp2040I2c<'d, T: Instance> {
    i2c: I2c<'d, T, Async>,
}

impl<'d, T: Instance> Rp2040I2c<'d, T> {
    /// Take ownership of a configured I2C peripheral
    pub fn new(i2c: I2c<'d, T, Async>) -> Self {
        Self { i2c }
    }
}

impl<'d, T: Instance> I2cBus for Rp2040I2c<'d, T> {
    fn submit(&mut self, transaction: Transaction, timeout_ms: u32) -> Result<(), BusError> {
        let address = transaction.address().get();
        let bytes = transaction.payload().iter().copied();
        let write = self.i2c.write_async(address, bytes);

        let deadline = Instant::now() + Duration::from_millis(timeout_ms as u64);
        match poll_until(write, || Instant::now() >= deadline) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(BusError::from_kind(e.kind())),
            None => Err(BusError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_blocks() {
        assert_eq!(I2cBlock::for_sda(4), Some(I2cBlock::I2c0));
        assert_eq!(I2cBlock::for_scl(5), Some(I2cBlock::I2c0));
        assert_eq!(I2cBlock::for_sda(6), Some(I2cBlock::I2c1));
        assert_eq!(I2cBlock::for_scl(7), Some(I2cBlock::I2c1));

        assert_eq!(I2cBlock::for_sda(5), None);
        assert_eq!(I2cBlock::for_scl(4), None);
        assert_eq!(I2cBlock::for_sda(32), None);
    }

    #[test]
    fn test_configure_rejects_split_pair() {
        // SDA on I2C0, SCL on I2C1
        let config = I2cConfig::new(4, 7, I2cConfig::FAST);
        assert!(matches!(configure(&config), Err(ConfigError::InvalidPins)));

        let config = I2cConfig::new(4, 5, I2cConfig::FAST);
        assert!(matches!(configure(&config), Ok((I2cBlock::I2c0, _))));
    }
}
