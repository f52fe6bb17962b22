//! Stone Tablet Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware interfaces the monitor is built
//! on: an addressed two-wire bus that accepts whole transactions, an
//! analog input that produces raw counts, and an analog output that
//! accepts 8-bit set points. Chip-specific crates implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tablet-firmware / tablet-display       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tablet-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  tablet-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - Atomic I2C write transactions
//! - [`analog::AnalogInput`] - Raw analog samples
//! - [`analog::AnalogOutput`] - Raw analog set points
//!
//! [`poll::poll_until`] lets blocking implementations drive a
//! platform's async transfers under a deadline.

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod i2c;
pub mod poll;

// Re-export key types at crate root for convenience
pub use analog::{AnalogError, AnalogInput, AnalogOutput};
pub use i2c::{Address, BusError, ConfigError, I2cBus, I2cConfig, Transaction};
