//! Query parsing - split lines like "1 kg = g" into their parts

use serde::Serialize;
use tracing::trace;
use crate::error::ParseError;

/// A parsed conversion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    /// The quantity to convert, never negative
    pub quantity: f64,
    /// The quantity exactly as typed, for echoing back
    pub quantity_text: String,
    /// Unit to convert from (e.g., "kg")
    pub source_unit: String,
    /// Unit to convert to (e.g., "g")
    pub target_unit: String,
}

/// Parse a query of the form `Number UnitToConvertFrom = UnitToConvertTo`.
///
/// Parts are separated by single spaces; doubled spaces produce empty parts
/// and make the query malformed.
pub fn parse_query(line: &str) -> Result<Query, ParseError> {
    let tokens: Vec<&str> = line.split(' ').collect();

    let &[number, source, equals, target] = tokens.as_slice() else {
        return Err(ParseError::MalformedQuery { line: line.to_string() });
    };
    if equals != "=" {
        return Err(ParseError::MalformedQuery { line: line.to_string() });
    }

    let quantity = parse_quantity(number)?;
    trace!(quantity, source, target, "parsed query");

    Ok(Query {
        quantity,
        quantity_text: number.to_string(),
        source_unit: source.to_string(),
        target_unit: target.to_string(),
    })
}

/// Parse a non-negative, finite decimal quantity
fn parse_quantity(token: &str) -> Result<f64, ParseError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ParseError::InvalidNumber { token: token.to_string() })?;

    if !value.is_finite() {
        return Err(ParseError::InvalidNumber { token: token.to_string() });
    }
    if value < 0.0 {
        return Err(ParseError::NegativeNumber { token: token.to_string() });
    }

    // Fold -0 into 0
    Ok(value.abs())
}
