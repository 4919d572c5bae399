//! SI root units
//!
//! The seven unprefixed SI base unit symbols. Mass uses the gram rather than
//! the kilogram so that every prefix, including "k", applies uniformly.

use std::fmt;
use serde::{Serialize, Deserialize};

/// An unprefixed SI base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootUnit {
    Meter,
    Gram,
    Second,
    Ampere,
    Kelvin,
    Candela,
    Mole,
}

/// Suffix match order. Longer symbols come first so that a short symbol can
/// never claim the tail of a longer one.
static ROOT_UNITS: [RootUnit; 7] = [
    RootUnit::Mole,
    RootUnit::Candela,
    RootUnit::Meter,
    RootUnit::Gram,
    RootUnit::Second,
    RootUnit::Ampere,
    RootUnit::Kelvin,
];

impl RootUnit {
    /// The SI symbol (e.g., "m", "cd", "mol")
    pub fn symbol(&self) -> &'static str {
        match self {
            RootUnit::Meter => "m",
            RootUnit::Gram => "g",
            RootUnit::Second => "s",
            RootUnit::Ampere => "A",
            RootUnit::Kelvin => "K",
            RootUnit::Candela => "cd",
            RootUnit::Mole => "mol",
        }
    }

    /// The unit name (e.g., "meter", "gram")
    pub fn name(&self) -> &'static str {
        match self {
            RootUnit::Meter => "meter",
            RootUnit::Gram => "gram",
            RootUnit::Second => "second",
            RootUnit::Ampere => "ampere",
            RootUnit::Kelvin => "kelvin",
            RootUnit::Candela => "candela",
            RootUnit::Mole => "mole",
        }
    }

    /// The physical quantity measured by this unit
    pub fn quantity(&self) -> &'static str {
        match self {
            RootUnit::Meter => "length",
            RootUnit::Gram => "mass",
            RootUnit::Second => "time",
            RootUnit::Ampere => "current",
            RootUnit::Kelvin => "temperature",
            RootUnit::Candela => "luminosity",
            RootUnit::Mole => "amount",
        }
    }

    /// Split a unit token into its leading prefix text and root unit.
    ///
    /// The first root unit (in match order) whose symbol ends the token wins.
    pub fn split_suffix(token: &str) -> Option<(&str, RootUnit)> {
        ROOT_UNITS.iter().find_map(|root| {
            token
                .strip_suffix(root.symbol())
                .map(|prefix| (prefix, *root))
        })
    }
}

/// All root units in suffix match order
pub fn root_units() -> impl Iterator<Item = RootUnit> {
    ROOT_UNITS.iter().copied()
}

impl fmt::Display for RootUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
