//! siconv core - SI Prefix Unit Conversion
//!
//! Converts a quantity between two prefixed forms of the same SI root unit,
//! e.g. `1 kg = g` or `250 ms = s`.
//!
//! Pipeline:
//! - Parse: "1 kg = g" → [`Query`]
//! - Resolve: "kg" → prefix "k" (10^3) + root unit "g" ([`ResolvedUnit`])
//! - Convert: quantity × source multiplier ÷ target multiplier
//!
//! Root units: m, g, s, A, K, cd, mol
//!
//! Prefixes:
//! - Decimal: c, d, da, h (10^-2 .. 10^2)
//! - Engineering: y, z, a, f, p, n, u, m, k, M, G, T, P, E, Z, Y (10^-24 .. 10^24)
//!
//! Every operation is a pure function over static tables, safe to call from
//! any thread.

mod root;
mod prefix;
mod unit;
mod parse;
mod convert;
mod format;
pub mod error;

pub use root::{RootUnit, root_units};
pub use prefix::{Prefix, DECIMAL_PREFIXES, ENGINEERING_PREFIXES, lookup_prefix, prefixes};
pub use unit::{ResolvedUnit, resolve_unit};
pub use parse::{Query, parse_query};
pub use convert::{Conversion, ConversionResult, convert, convert_line};
pub use format::format_quantity;
pub use error::{ConvertError, ErrorReport, ParseError, ResolveError};
