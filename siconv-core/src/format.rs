//! Quantity formatting
//!
//! Plain decimals with at least one fractional digit inside [1e-3, 1e7),
//! scientific notation ("1.5E9", "1.0E-6") outside it. Zero prints as "0.0",
//! overflow as "Infinity".

/// Format a converted quantity for display
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        // `{:e}` gives the shortest round-trip mantissa, e.g. "1.5e9", "1e-6"
        let sci = format!("{:e}", value);
        match sci.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
            None => sci,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_a_fraction() {
        assert_eq!(format_quantity(1000.0), "1000.0");
        assert_eq!(format_quantity(1.0), "1.0");
        assert_eq!(format_quantity(0.0), "0.0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(2.25), "2.25");
        assert_eq!(format_quantity(0.001), "0.001");
    }

    #[test]
    fn test_large_values_use_scientific() {
        assert_eq!(format_quantity(1e7), "1.0E7");
        assert_eq!(format_quantity(1.5e9), "1.5E9");
        assert_eq!(format_quantity(9999999.0), "9999999.0");
    }

    #[test]
    fn test_small_values_use_scientific() {
        assert_eq!(format_quantity(1e-6), "1.0E-6");
        assert_eq!(format_quantity(2.5e-4), "2.5E-4");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_quantity(f64::INFINITY), "Infinity");
        assert_eq!(format_quantity(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_quantity(f64::NAN), "NaN");
    }
}
