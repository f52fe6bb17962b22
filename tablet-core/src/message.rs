//! On-screen text

use core::fmt::Write;

use heapless::String;

/// Capacity of one full-screen message
pub const MESSAGE_LEN: usize = 32;

/// One full-screen message
pub type Message = String<MESSAGE_LEN>;

/// Banner line, centered in 16 columns
pub const TITLE: &str = "  Stone Tablet  ";

/// Percentage right-justified in three columns
pub fn format_percent(percent: u8) -> String<3> {
    let mut out = String::new();
    // u8 never needs more than three digits
    let _ = write!(out, "{:>3}", percent);
    out
}

/// Title, a blank line, then the reading on the third line
///
/// ```text
///   Stone Tablet
///
/// Moisture  57 %
/// ```
pub fn moisture_message(percent: u8) -> Message {
    let mut out = Message::new();
    // 16 + 2 + 9 + 3 + 2 bytes, exactly the capacity
    let _ = write!(out, "{}\n\nMoisture {} %", TITLE, format_percent(percent));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0).as_str(), "  0");
        assert_eq!(format_percent(57).as_str(), " 57");
        assert_eq!(format_percent(100).as_str(), "100");
    }

    #[test]
    fn test_message_layout() {
        let message = moisture_message(7);
        assert_eq!(message.as_str(), "  Stone Tablet  \n\nMoisture   7 %");

        let lines: Vec<&str> = message.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 16);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_widest_message_fits() {
        let message = moisture_message(255);
        assert_eq!(message.len(), MESSAGE_LEN);
        assert!(message.ends_with("Moisture 255 %"));
    }

    #[test]
    fn test_calibrated_message() {
        let cal = crate::Calibration::DEFAULT;
        assert_eq!(
            moisture_message(cal.sample_to_percent(0)).as_str(),
            "  Stone Tablet  \n\nMoisture 100 %"
        );
        assert_eq!(
            moisture_message(cal.sample_to_percent(1750)).as_str(),
            "  Stone Tablet  \n\nMoisture  57 %"
        );
    }
}
