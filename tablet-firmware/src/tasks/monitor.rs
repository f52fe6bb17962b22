//! Sample loop
//!
//! Every period: step the sweep output, sample the probe, calibrate and
//! redraw the screen. Failures are logged when they start and when they
//! clear, so a missing panel does not flood the log at the sample rate.

use defmt::*;
use embassy_time::{Duration, Ticker};

use tablet_core::Monitor;
use tablet_display::TextDisplay;
use tablet_hal::{AnalogInput, AnalogOutput};

/// Run the monitor forever
pub async fn monitor_loop<D, I, O>(
    mut display: D,
    mut probe: I,
    mut sweep: O,
    mut monitor: Monitor,
    period_ms: u32,
) where
    D: TextDisplay,
    I: AnalogInput,
    O: AnalogOutput,
{
    info!("Monitor loop started ({} ms period)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));
    let mut sampling = true;
    let mut rendering = true;

    loop {
        match monitor.step(&mut probe, &mut sweep) {
            Ok(reading) => {
                if !sampling {
                    info!("Sampling recovered");
                    sampling = true;
                }
                debug!(
                    "set point {} raw {} ({} V) -> {}%",
                    reading.set_point, reading.raw, reading.volts, reading.percent
                );

                match display.display_text(&reading.message()) {
                    Ok(()) if !rendering => {
                        info!("Display recovered");
                        rendering = true;
                    }
                    Ok(()) => {}
                    Err(e) if rendering => {
                        warn!("Display write failed: {}", e);
                        rendering = false;
                    }
                    Err(_) => {}
                }
            }
            Err(e) if sampling => {
                warn!("Sample failed: {}", e);
                sampling = false;
            }
            Err(_) => {}
        }

        ticker.next().await;
    }
}
