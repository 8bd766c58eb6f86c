/// Decimal places shown for every displayed number.
pub const DISPLAY_DECIMALS: i32 = 3;

/// Round to [`DISPLAY_DECIMALS`] places. Non-finite values pass through.
#[must_use]
pub fn round_display(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10_f64.powi(DISPLAY_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Keep "-0" out of the UI.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Display form of a number: rounded, without trailing zeros.
#[must_use]
pub fn format_num(value: f64) -> String {
    round_display(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_places() {
        assert_eq!(format_num(6.08 / 3.0), "2.027");
        assert_eq!(format_num(5.68 / 3.0), "1.893");
        assert_eq!(format_num(1.0), "1");
        assert_eq!(format_num(-0.8), "-0.8");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_num(-0.0001), "0");
        assert_eq!(format_num(-0.0), "0");
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(format_num(f64::NAN), "NaN");
        assert_eq!(format_num(f64::INFINITY), "inf");
        assert!(round_display(f64::NEG_INFINITY).is_infinite());
    }
}
