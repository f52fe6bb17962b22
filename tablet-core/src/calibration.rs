//! Probe calibration
//!
//! Converts raw 12-bit ADC counts into volts, then volts into a moisture
//! percentage. The probe reads high when dry, so the percentage falls as
//! the voltage rises.
//!
//! The percentage is computed in two stages and the intermediate result
//! is truncated to an integer before the second stage. This matches the
//! readings the coefficients were fitted against, so the truncations are
//! kept as they are.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calibration coefficients
///
/// Defaults were fitted on the bench against a capacitive probe powered
/// from 3.3 V with a 3.9 V full-scale ADC range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Calibration {
    /// Volts per ADC count (3.9 V / 4096)
    pub volts_per_count: f64,
    /// First stage: volts to raw span units
    pub percent_per_volt: f64,
    /// Second stage gain, negative because the probe reads high when dry
    pub span_gain: f64,
    /// Second stage offset
    pub span_offset: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Calibration {
    pub const DEFAULT: Self = Self {
        volts_per_count: 0.000952,
        percent_per_volt: 30.3,
        span_gain: -2.703,
        span_offset: 191.89,
    };

    /// Convert a raw ADC sample to volts
    pub fn sample_to_volts(&self, raw: u16) -> f32 {
        (f64::from(raw) * self.volts_per_count) as f32
    }

    /// Convert volts to a moisture percentage in `0..=100`
    ///
    /// Both stages truncate toward zero; the result is clamped at the end.
    /// NaN reads as zero volts.
    pub fn volts_to_percent(&self, volts: f32) -> u8 {
        let span = (f64::from(volts) * self.percent_per_volt) as i32;
        let percent = (f64::from(span) * self.span_gain + self.span_offset + 0.5) as i32;
        percent.clamp(0, 100) as u8
    }

    /// Raw sample straight to percentage
    pub fn sample_to_percent(&self, raw: u16) -> u8 {
        self.volts_to_percent(self.sample_to_volts(raw))
    }

    /// Coefficients must be finite, the count scale and first stage
    /// positive, and the second stage gain non-zero
    pub fn is_valid(&self) -> bool {
        let finite = self.volts_per_count.is_finite()
            && self.percent_per_volt.is_finite()
            && self.span_gain.is_finite()
            && self.span_offset.is_finite();

        finite && self.volts_per_count > 0.0 && self.percent_per_volt > 0.0 && self.span_gain != 0.0
    }
}

/// [`Calibration::sample_to_volts`] with the default coefficients
pub fn sample_to_volts(raw: u16) -> f32 {
    Calibration::DEFAULT.sample_to_volts(raw)
}

/// [`Calibration::volts_to_percent`] with the default coefficients
pub fn volts_to_percent(volts: f32) -> u8 {
    Calibration::DEFAULT.volts_to_percent(volts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tablet_hal::analog::ADC_MAX_COUNT;

    #[test]
    fn test_end_points() {
        assert_eq!(sample_to_volts(0), 0.0);
        assert_eq!(volts_to_percent(0.0), 100);

        // 3.898 V -> 118 span units -> -126 before clamping
        assert_eq!(Calibration::DEFAULT.sample_to_percent(ADC_MAX_COUNT), 0);
    }

    #[test]
    fn test_mid_scale() {
        // 1.666 V -> 50.48 -> 50, then 50 * -2.703 + 192.39 = 57.24
        let volts = sample_to_volts(1750);
        assert!((volts - 1.666).abs() < 1e-6);
        assert_eq!(volts_to_percent(volts), 57);
    }

    #[test]
    fn test_first_stage_truncates() {
        // 1.69 V and 1.70 V both land on 51 span units
        assert_eq!(volts_to_percent(1.69), volts_to_percent(1.70));
        assert_eq!(volts_to_percent(1.70), 54);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(volts_to_percent(-1.0), 100);
        assert_eq!(volts_to_percent(10.0), 0);
        assert_eq!(volts_to_percent(f32::NAN), 100);
        assert_eq!(volts_to_percent(f32::INFINITY), 0);
    }

    #[test]
    fn test_validity() {
        assert!(Calibration::DEFAULT.is_valid());
        assert_eq!(Calibration::default(), Calibration::DEFAULT);

        let flat = Calibration { span_gain: 0.0, ..Calibration::DEFAULT };
        assert!(!flat.is_valid());

        let nan = Calibration { span_offset: f64::NAN, ..Calibration::DEFAULT };
        assert!(!nan.is_valid());

        let negative = Calibration { volts_per_count: -0.001, ..Calibration::DEFAULT };
        assert!(!negative.is_valid());
    }

    proptest! {
        #[test]
        fn prop_volts_monotonic(raw in 0u16..4095) {
            prop_assert!(sample_to_volts(raw) <= sample_to_volts(raw + 1));
        }

        #[test]
        fn prop_percent_falls_as_sample_rises(raw in 0u16..4095) {
            let cal = Calibration::DEFAULT;
            prop_assert!(cal.sample_to_percent(raw) >= cal.sample_to_percent(raw + 1));
        }

        #[test]
        fn prop_percent_in_range(volts in any::<f32>()) {
            prop_assert!(volts_to_percent(volts) <= 100);
        }
    }
}
