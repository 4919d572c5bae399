//! SI prefix tables
//!
//! Two fixed tables: the decimal prefixes (centi..hecto) and the engineering
//! prefixes (yocto..yotta, steps of 10^3). Both define the empty prefix, and
//! both agree that it means 10^0.

use serde::Serialize;

/// An SI multiplier symbol scaling a root unit by a power of ten
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prefix {
    /// The prefix symbol (e.g., "k", "da"), empty for no prefix
    pub symbol: &'static str,
    /// The prefix name (e.g., "kilo"), empty for no prefix
    pub name: &'static str,
    /// Power of ten applied to the root unit
    pub power: i32,
    /// 10^power, written as a literal so it is the nearest double
    multiplier: f64,
}

impl Prefix {
    const fn new(symbol: &'static str, name: &'static str, power: i32, multiplier: f64) -> Self {
        Prefix { symbol, name, power, multiplier }
    }

    /// The scale factor relative to the root unit
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

/// centi..hecto
pub static DECIMAL_PREFIXES: [Prefix; 5] = [
    Prefix::new("c", "centi", -2, 1e-2),
    Prefix::new("d", "deci", -1, 1e-1),
    Prefix::new("", "", 0, 1.0),
    Prefix::new("da", "deca", 1, 1e1),
    Prefix::new("h", "hecto", 2, 1e2),
];

/// yocto..yotta
pub static ENGINEERING_PREFIXES: [Prefix; 17] = [
    Prefix::new("y", "yocto", -24, 1e-24),
    Prefix::new("z", "zepto", -21, 1e-21),
    Prefix::new("a", "atto", -18, 1e-18),
    Prefix::new("f", "femto", -15, 1e-15),
    Prefix::new("p", "pico", -12, 1e-12),
    Prefix::new("n", "nano", -9, 1e-9),
    Prefix::new("u", "micro", -6, 1e-6),
    Prefix::new("m", "milli", -3, 1e-3),
    Prefix::new("", "", 0, 1.0),
    Prefix::new("k", "kilo", 3, 1e3),
    Prefix::new("M", "mega", 6, 1e6),
    Prefix::new("G", "giga", 9, 1e9),
    Prefix::new("T", "tera", 12, 1e12),
    Prefix::new("P", "peta", 15, 1e15),
    Prefix::new("E", "exa", 18, 1e18),
    Prefix::new("Z", "zetta", 21, 1e21),
    Prefix::new("Y", "yotta", 24, 1e24),
];

/// Look up a prefix by exact symbol in either table
pub fn lookup_prefix(symbol: &str) -> Option<&'static Prefix> {
    prefixes().find(|p| p.symbol == symbol)
}

/// Every table entry, decimal table first. The empty prefix appears twice.
pub fn prefixes() -> impl Iterator<Item = &'static Prefix> {
    DECIMAL_PREFIXES.iter().chain(ENGINEERING_PREFIXES.iter())
}
