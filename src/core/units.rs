//! Linear units and their meters-per-unit factors.

use crate::core::constants::EARTH_SPHERE_RADIUS;
use crate::prelude::HashMap;
use crate::{MapError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// A linear unit of a map projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    Degrees,
    #[serde(alias = "m")]
    Meters,
    #[serde(alias = "ft")]
    Feet,
    #[serde(alias = "us-ft")]
    UsFeet,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Degrees, Unit::Meters, Unit::Feet, Unit::UsFeet];

    /// Short identifier as used by projection definitions
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Degrees => "degrees",
            Unit::Meters => "m",
            Unit::Feet => "ft",
            Unit::UsFeet => "us-ft",
        }
    }

    /// Meters covered by one unit
    pub fn meters_per_unit(&self) -> f64 {
        meters_per_unit(*self)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Meters
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Unit {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" => Ok(Unit::Degrees),
            "m" | "meters" | "metres" => Ok(Unit::Meters),
            "ft" | "feet" => Ok(Unit::Feet),
            "us-ft" | "us-feet" => Ok(Unit::UsFeet),
            _ => Err(MapError::InvalidUnit(s.to_string())),
        }
    }
}

/// Process-wide unit table, built once on first access.
static METERS_PER_UNIT: Lazy<HashMap<Unit, f64>> = Lazy::new(|| {
    let mut table = HashMap::default();
    table.insert(Unit::Degrees, 2.0 * PI * EARTH_SPHERE_RADIUS / 360.0);
    table.insert(Unit::Meters, 1.0);
    table.insert(Unit::Feet, 0.3048);
    table.insert(Unit::UsFeet, 1200.0 / 3937.0);
    table
});

/// Meters per unit for a known unit
pub fn meters_per_unit(unit: Unit) -> f64 {
    // every variant is inserted above
    METERS_PER_UNIT.get(&unit).copied().unwrap_or(1.0)
}

/// Meters per unit for a unit identifier such as `"m"` or `"us-ft"`.
///
/// Fails with [`MapError::InvalidUnit`] for identifiers outside the table.
pub fn meters_per_unit_for(code: &str) -> Result<f64> {
    code.parse::<Unit>().map(meters_per_unit)
}
