//! Pin assignments for the monitor board
//!
//! GPIO numbers, checked at boot against the RP2040 pin mux. `main.rs`
//! claims the matching `PIN_n` peripherals by name and asserts at compile
//! time that they agree with these; change both together.

/// OLED data line (I2C0 SDA)
pub const SDA_PIN: u8 = 4;
/// OLED clock line (I2C0 SCL)
pub const SCL_PIN: u8 = 5;

/// Moisture probe (ADC0)
pub const PROBE_PIN: u8 = 26;

/// Sweep output, RC-filtered PWM (slice 0, output A)
pub const SWEEP_PIN: u8 = 16;
/// [`tablet_hal::AnalogOutput`] channel of [`SWEEP_PIN`]
pub const SWEEP_CHANNEL: u8 = 0;
