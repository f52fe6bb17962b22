//! Board-agnostic logic for the moisture monitor
//!
//! Everything between a raw probe sample and the text on the panel that
//! does not touch hardware:
//!
//! - Calibration from ADC counts to volts to a moisture percentage
//! - The on-screen message template
//! - One cycle of the output sweep and probe sample
//! - Monitor configuration types and their validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod calibration;
pub mod config;
pub mod message;
pub mod monitor;

pub use calibration::{sample_to_volts, volts_to_percent, Calibration};
pub use config::{BusSettings, ConfigError, MonitorConfig, DEFAULT_DISPLAY_ADDRESS};
pub use message::{format_percent, moisture_message, Message, MESSAGE_LEN, TITLE};
pub use monitor::{Monitor, Reading};
