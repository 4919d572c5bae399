//! Quantity conversion between units sharing a root unit

use std::fmt;
use serde::Serialize;
use tracing::debug;
use crate::error::ConvertError;
use crate::format::format_quantity;
use crate::parse::{parse_query, Query};
use crate::unit::resolve_unit;

/// The converted quantity in the target unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub quantity: f64,
    /// The target unit token as typed
    pub unit: String,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_quantity(self.quantity), self.unit)
    }
}

/// A completed conversion: the request and its answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub query: Query,
    pub result: ConversionResult,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {}", self.query.quantity_text, self.query.source_unit, self.result)
    }
}

/// Convert a parsed query into its target unit
pub fn convert(query: &Query) -> Result<ConversionResult, ConvertError> {
    let source = resolve_unit(&query.source_unit)?;
    let target = resolve_unit(&query.target_unit)?;

    if !source.is_compatible(&target) {
        return Err(ConvertError::RootUnitMismatch {
            source_unit: source.root,
            target_unit: target.root,
        });
    }

    let quantity = query.quantity * source.multiplier / target.multiplier;
    debug!(from = %source, to = %target, input = query.quantity, output = quantity, "converted");

    Ok(ConversionResult {
        quantity,
        unit: query.target_unit.clone(),
    })
}

/// Parse and convert one raw query line, e.g. "1 kg = g".
///
/// The first error encountered is returned.
pub fn convert_line(line: &str) -> Result<Conversion, ConvertError> {
    let query = parse_query(line)?;
    let result = convert(&query)?;
    Ok(Conversion { query, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, ResolveError};
    use crate::RootUnit;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_kilogram_to_gram() {
        let conversion = convert_line("1 kg = g").unwrap();
        assert_eq!(conversion.result.quantity, 1000.0);
        assert_eq!(conversion.result.unit, "g");
        assert_eq!(conversion.to_string(), "1 kg = 1000.0 g");
    }

    #[test]
    fn test_downward_conversion() {
        let conversion = convert_line("2500 mm = m").unwrap();
        assert!(approx_eq(conversion.result.quantity, 2.5));
        assert_eq!(conversion.to_string(), "2500 mm = 2.5 m");
    }

    #[test]
    fn test_across_tables() {
        // centi (decimal table) to micro (engineering table)
        let conversion = convert_line("1 cm = um").unwrap();
        assert!(approx_eq(conversion.result.quantity, 10_000.0));

        let conversion = convert_line("3 dam = hm").unwrap();
        assert!(approx_eq(conversion.result.quantity, 0.3));
    }

    #[test]
    fn test_zero_quantity() {
        let conversion = convert_line("0 Ms = ns").unwrap();
        assert_eq!(conversion.result.quantity, 0.0);
        assert_eq!(conversion.to_string(), "0 Ms = 0.0 ns");

        let conversion = convert_line("-0 kg = g").unwrap();
        assert_eq!(conversion.to_string(), "-0 kg = 0.0 g");
    }

    #[test]
    fn test_yocto_is_exact() {
        let conversion = convert_line("1 ym = m").unwrap();
        assert_eq!(conversion.result.quantity, 1e-24);
        assert_eq!(conversion.to_string(), "1 ym = 1.0E-24 m");
    }

    #[test]
    fn test_overflow_displays_infinity() {
        let conversion = convert_line("1e308 Ym = ym").unwrap();
        assert!(conversion.result.quantity.is_infinite());
        assert_eq!(conversion.to_string(), "1e308 Ym = Infinity ym");
    }

    #[test]
    fn test_input_echoed_as_typed() {
        let conversion = convert_line("1.50 kmol = mol").unwrap();
        assert_eq!(conversion.to_string(), "1.50 kmol = 1500.0 mol");
    }

    #[test]
    fn test_extreme_prefixes() {
        let conversion = convert_line("1 YA = yA").unwrap();
        assert!(approx_eq(conversion.result.quantity, 1e48));
        assert!(conversion.result.to_string().ends_with("E48 yA"));
    }

    #[test]
    fn test_root_unit_mismatch() {
        assert_eq!(
            convert_line("1 kg = m"),
            Err(ConvertError::RootUnitMismatch {
                source_unit: RootUnit::Gram,
                target_unit: RootUnit::Meter,
            })
        );
    }

    #[test]
    fn test_negative_number() {
        assert!(matches!(
            convert_line("-1 kg = g"),
            Err(ConvertError::Parse(ParseError::NegativeNumber { .. }))
        ));
    }

    #[test]
    fn test_unknown_root_unit() {
        assert!(matches!(
            convert_line("1 xyz = g"),
            Err(ConvertError::Resolve(ResolveError::UnknownRootUnit { .. }))
        ));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            convert_line("abc kg = g"),
            Err(ConvertError::Parse(ParseError::InvalidNumber { .. }))
        ));
    }

    #[test]
    fn test_source_error_reported_first() {
        let err = convert_line("1 Qg = Xm").unwrap_err();
        assert_eq!(err, ConvertError::Resolve(ResolveError::UnknownPrefix {
            token: "Qg".to_string(),
            prefix: "Q".to_string(),
        }));
    }

    #[test]
    fn test_parse_error_before_unit_errors() {
        assert!(matches!(
            convert_line("abc xyz = g"),
            Err(ConvertError::Parse(ParseError::InvalidNumber { .. }))
        ));
    }

    #[test]
    fn test_convert_query_directly() {
        let query = Query {
            quantity: 5.0,
            quantity_text: "5".to_string(),
            source_unit: "GK".to_string(),
            target_unit: "MK".to_string(),
        };
        let result = convert(&query).unwrap();
        assert!(approx_eq(result.quantity, 5000.0));
        assert_eq!(result.unit, "MK");
    }

    fn unit_symbol() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "y", "z", "a", "f", "p", "n", "u", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
            "c", "d", "da", "h",
        ])
    }

    fn root_symbol() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["m", "g", "s", "A", "K", "cd", "mol"])
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            quantity in 0.0f64..1e12,
            from in unit_symbol(),
            to in unit_symbol(),
            root in root_symbol(),
        ) {
            let there = convert_line(&format!("{} {}{} = {}{}", quantity, from, root, to, root)).unwrap();
            let back = convert_line(&format!("{} {}{} = {}{}", there.result.quantity, to, root, from, root)).unwrap();
            prop_assert!(approx_eq(back.result.quantity, quantity),
                "{} -> {} -> {}", quantity, there.result.quantity, back.result.quantity);
        }
    }
}
