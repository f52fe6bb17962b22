//! Stone Tablet - Soil Moisture Monitor Firmware
//!
//! Samples a moisture probe on an RP2040 and shows the calibrated
//! reading on a 128x64 SSD1306 OLED over I2C. Bus settings, sample
//! period and calibration come from `monitor.toml` at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tablet_core::{Monitor, TITLE};
use tablet_display::{Ssd1306, TextDisplay};
use tablet_hal_rp2040::adc::{AdcChannel, ProbeInput};
use tablet_hal_rp2040::i2c::{configure, I2cBlock, Rp2040I2c};
use tablet_hal_rp2040::pwm::{pwm_slot, PwmDac};

mod board;
mod tasks;

// Generated by build.rs from monitor.toml
include!(concat!(env!("OUT_DIR"), "/monitor_config.rs"));

// Peripherals below are claimed by type (`p.PIN_4`, ...), not by the
// board numbers; these keep the two in step
const _: () = assert!(board::SDA_PIN == 4 && board::SCL_PIN == 5);
const _: () = assert!(board::PROBE_PIN == 26);
const _: () = assert!(board::SWEEP_PIN == 16 && board::SWEEP_CHANNEL == 0);

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Stone Tablet firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = MONITOR_CONFIG;
    info!(
        "Config: display {=u8:#x} at {} Hz, timeout {} ms, sample every {} ms",
        config.bus.display_address,
        config.bus.frequency,
        config.bus.timeout_ms,
        config.sample_period_ms
    );

    // Board pins must match the peripherals claimed below
    let i2c_config = config.bus.i2c_config(board::SDA_PIN, board::SCL_PIN);
    let rp_i2c_config = match configure(&i2c_config) {
        Ok((I2cBlock::I2c0, rp_config)) => rp_config,
        Ok((block, _)) => {
            error!("SDA/SCL pins belong to {}, board uses I2C0", block);
            return;
        }
        Err(e) => {
            error!("I2C configuration rejected: {}", e);
            return;
        }
    };
    let address = match config.bus.address() {
        Ok(address) => address,
        Err(e) => {
            error!("Display address rejected: {}", e);
            return;
        }
    };
    let Some(probe_channel) = AdcChannel::from_gpio(board::PROBE_PIN) else {
        error!("GPIO{} has no ADC channel", board::PROBE_PIN);
        return;
    };
    let Some((slice, output)) = pwm_slot(board::SWEEP_PIN) else {
        error!("GPIO{} has no PWM output", board::SWEEP_PIN);
        return;
    };

    // Analog side first, then give it a moment to settle
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let probe = ProbeInput::new(adc, Channel::new_pin(p.PIN_26, Pull::None));
    info!("Probe on {} (GPIO{})", probe_channel, board::PROBE_PIN);

    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, PwmDac::initial_config());
    let sweep = PwmDac::new(pwm);
    info!("Sweep on PWM slice {} output {} (GPIO{})", slice, output, board::SWEEP_PIN);

    Timer::after_millis(20).await;

    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, rp_i2c_config);
    let mut display = Ssd1306::new(Rp2040I2c::new(i2c), address).with_timeout(config.bus.timeout_ms);

    // A dark panel is reported once; the loop keeps trying to draw
    match display.initialize() {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {}", e),
    }
    if let Err(e) = display.display_clear() {
        warn!("Display clear failed: {}", e);
    }
    if let Err(e) = display.display_text(TITLE) {
        warn!("Banner failed: {}", e);
    }

    let monitor = Monitor::new(config.calibration, board::SWEEP_CHANNEL);
    tasks::monitor_loop(display, probe, sweep, monitor, config.sample_period_ms).await;
}
