//! I2C bus abstractions
//!
//! The bus is driven one transaction at a time: a start condition, the
//! addressed write of a whole payload, and a stop condition. Transactions
//! are built up front and handed to [`I2cBus::submit`] by value, so a
//! submitted transaction can never be replayed by accident.

use core::fmt;

use embedded_hal::i2c::ErrorKind;
use heapless::Vec;

/// Largest payload one transaction can carry: a control byte followed
/// by a full 128-column display row.
pub const MAX_TRANSACTION_LEN: usize = 129;

/// Default per-transaction timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 10;

/// Errors raised while validating bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Not a usable 7-bit peripheral address
    InvalidAddress(u8),
    /// Data and clock pins are unusable as a pair
    InvalidPins,
    /// Clock frequency outside the supported range (Hz)
    InvalidFrequency(u32),
    /// Transaction timeout must be non-zero
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddress(addr) => write!(f, "invalid I2C address 0x{:02X}", addr),
            ConfigError::InvalidPins => f.write_str("invalid SDA/SCL pin pair"),
            ConfigError::InvalidFrequency(hz) => write!(f, "unsupported I2C frequency {} Hz", hz),
            ConfigError::InvalidTimeout => f.write_str("transaction timeout must be non-zero"),
        }
    }
}

/// Errors from a submitted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Transaction did not complete within its timeout
    Timeout,
    /// Peripheral did not acknowledge
    Nack,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Bus error (misplaced start/stop)
    Bus,
    /// Payload does not fit in one transaction
    Overflow,
    /// Any other platform error
    Other,
}

impl BusError {
    /// Map a platform error through the embedded-hal error kind
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => BusError::Nack,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            ErrorKind::Bus => BusError::Bus,
            _ => BusError::Other,
        }
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BusError::Timeout => "bus timeout",
            BusError::Nack => "peripheral did not acknowledge",
            BusError::ArbitrationLost => "arbitration lost",
            BusError::Bus => "bus error",
            BusError::Overflow => "transaction payload too long",
            BusError::Other => "bus failure",
        };
        f.write_str(msg)
    }
}

/// A validated 7-bit peripheral address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Validate a 7-bit address
    ///
    /// Rejects the reserved ranges 0x00-0x07 and 0x78-0x7F, and
    /// anything wider than 7 bits.
    pub const fn new(addr: u8) -> Result<Self, ConfigError> {
        if addr < 0x08 || addr > 0x77 {
            return Err(ConfigError::InvalidAddress(addr));
        }
        Ok(Self(addr))
    }

    /// The raw 7-bit address
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// One start/write/stop exchange on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    address: Address,
    payload: Vec<u8, MAX_TRANSACTION_LEN>,
}

impl Transaction {
    /// Start an addressed write transaction
    pub fn write(address: Address) -> Self {
        Self {
            address,
            payload: Vec::new(),
        }
    }

    /// Append a single byte
    pub fn byte(mut self, byte: u8) -> Result<Self, BusError> {
        self.payload.push(byte).map_err(|_| BusError::Overflow)?;
        Ok(self)
    }

    /// Append a run of bytes
    pub fn bytes(mut self, bytes: &[u8]) -> Result<Self, BusError> {
        self.payload
            .extend_from_slice(bytes)
            .map_err(|_| BusError::Overflow)?;
        Ok(self)
    }

    /// Target peripheral
    pub fn address(&self) -> Address {
        self.address
    }

    /// Bytes written after the address phase
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// I2C bus master
///
/// A single owner drives the bus; at most one transaction is in flight.
/// Implementations must not retry internally: the display protocol is
/// stateful, so a silent retry could leave the controller out of step
/// with the driver.
pub trait I2cBus {
    /// Submit a transaction and block until it completes or times out
    fn submit(&mut self, transaction: Transaction, timeout_ms: u32) -> Result<(), BusError>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    fn submit(&mut self, transaction: Transaction, timeout_ms: u32) -> Result<(), BusError> {
        (**self).submit(transaction, timeout_ms)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// GPIO number of the data line
    pub sda_pin: u8,
    /// GPIO number of the clock line
    pub scl_pin: u8,
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Per-transaction timeout in milliseconds
    pub timeout_ms: u32,
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: u32 = 100_000;

    /// Fast mode (400 kHz)
    pub const FAST: u32 = 400_000;

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: u32 = 1_000_000;

    /// Create a configuration with the default timeout
    pub const fn new(sda_pin: u8, scl_pin: u8, frequency: u32) -> Self {
        Self {
            sda_pin,
            scl_pin,
            frequency,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Check the platform-independent constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sda_pin == self.scl_pin {
            return Err(ConfigError::InvalidPins);
        }
        if self.frequency == 0 || self.frequency > Self::FAST_PLUS {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}
