//! Unit token resolution - split "kg" into prefix "k" and root unit "g"

use std::fmt;
use serde::Serialize;
use tracing::debug;
use crate::error::ResolveError;
use crate::prefix::{lookup_prefix, Prefix};
use crate::RootUnit;

/// A unit token resolved against the SI tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedUnit {
    /// The matched prefix table entry
    pub prefix: &'static Prefix,
    /// The root unit the token ends with
    pub root: RootUnit,
    /// Scale factor relative to the root unit (10^power)
    pub multiplier: f64,
}

impl ResolvedUnit {
    /// The prefix symbol, empty when the token is a bare root unit
    pub fn prefix_symbol(&self) -> &'static str {
        self.prefix.symbol
    }

    /// Full unit name (e.g., "kilogram", "second")
    pub fn name(&self) -> String {
        format!("{}{}", self.prefix.name, self.root.name())
    }

    /// Check if two units share a root unit (can be converted)
    pub fn is_compatible(&self, other: &ResolvedUnit) -> bool {
        self.root == other.root
    }
}

impl fmt::Display for ResolvedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.symbol, self.root)
    }
}

/// Resolve a unit token like "kg", "mmol" or "dam"
pub fn resolve_unit(token: &str) -> Result<ResolvedUnit, ResolveError> {
    let (prefix_text, root) = RootUnit::split_suffix(token)
        .ok_or_else(|| ResolveError::UnknownRootUnit { token: token.to_string() })?;

    let prefix = lookup_prefix(prefix_text).ok_or_else(|| ResolveError::UnknownPrefix {
        token: token.to_string(),
        prefix: prefix_text.to_string(),
    })?;

    let unit = ResolvedUnit {
        prefix,
        root,
        multiplier: prefix.multiplier(),
    };
    debug!(token, prefix = prefix.symbol, root = %root, multiplier = unit.multiplier, "resolved unit");
    Ok(unit)
}
