pub mod errors;

pub use errors::{MoodyError, MoodyErrorCategory, MoodyResult, ParserResult};

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One arcsecond in radians; readings are angular, heights are readings
/// integrated over the reflector foot spacing.
pub const ARCSEC_RADIANS: f64 = 2.0 * std::f64::consts::PI / (360.0 * 60.0 * 60.0);

/// Unit system declared in `Config.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    Metric,
    Imperial,
}

impl UnitMode {
    /// Unit of the configured foot spacing.
    pub const fn spacing_unit(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "inch",
        }
    }

    /// Unit of the final height column (worksheet column 8).
    pub const fn height_unit(self) -> &'static str {
        match self {
            Self::Metric => "micron",
            Self::Imperial => "10^-5in",
        }
    }

    /// Spacing-to-height multiplier: mm to microns, or inches to
    /// hundred-thousandths of an inch.
    pub const fn height_factor(self) -> f64 {
        match self {
            Self::Metric => 1_000.0,
            Self::Imperial => 100_000.0,
        }
    }
}

impl Display for UnitMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unit flag must be \"M\" (metric) or \"I\" (imperial), got \"{0}\"")]
pub struct UnitModeParseError(pub String);

impl FromStr for UnitMode {
    type Err = UnitModeParseError;

    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        match flag {
            "M" => Ok(Self::Metric),
            "I" => Ok(Self::Imperial),
            other => Err(UnitModeParseError(other.to_owned())),
        }
    }
}

/// Run configuration read once from `Config.txt` and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateConfig {
    pub units: UnitMode,
    /// Reflector foot spacing in mm (metric) or inches (imperial).
    pub foot_spacing: f64,
}

impl PlateConfig {
    pub const fn new(units: UnitMode, foot_spacing: f64) -> Self {
        Self {
            units,
            foot_spacing,
        }
    }

    /// Conversion factor from a column-7 angular value (arcsec) to the
    /// physical height unit of column 8.
    pub fn height_scale(&self) -> f64 {
        ARCSEC_RADIANS * self.foot_spacing * self.units.height_factor()
    }
}
