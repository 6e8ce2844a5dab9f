//! Registry of the eight fixed measurement lines of Moody's layout and the
//! raw readings collected along them.

use crate::domain::{MoodyError, MoodyResult};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Compiled station capacity; a line may carry at most `MAX_STATIONS - 2`
/// readings.
pub const MAX_STATIONS: usize = 128;

/// Maximum number of readings accepted along a single line.
pub const fn station_capacity() -> usize {
    MAX_STATIONS - 2
}

/// One of the eight measurement lines, in worksheet order: the two
/// diagonals, the four perimeter segments, the two center lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineId {
    NwSe,
    NeSw,
    NeNw,
    NeSe,
    SeSw,
    NwSw,
    EastWest,
    NorthSouth,
}

/// Role of a line in the calibration recipe; decides which solving pass
/// applies and which column feeds the global datum scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    Diagonal,
    Perimeter,
    Center,
}

/// End of a line, in traversal order of its stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl LineId {
    pub const COUNT: usize = 8;

    pub const ALL: [LineId; 8] = [
        Self::NwSe,
        Self::NeSw,
        Self::NeNw,
        Self::NeSe,
        Self::SeSw,
        Self::NwSw,
        Self::EastWest,
        Self::NorthSouth,
    ];

    pub const DIAGONALS: [LineId; 2] = [Self::NwSe, Self::NeSw];

    pub const PERIMETER: [LineId; 4] = [Self::NeNw, Self::NeSe, Self::SeSw, Self::NwSw];

    pub const CENTER: [LineId; 2] = [Self::EastWest, Self::NorthSouth];

    pub const fn index(self) -> usize {
        match self {
            Self::NwSe => 0,
            Self::NeSw => 1,
            Self::NeNw => 2,
            Self::NeSe => 3,
            Self::SeSw => 4,
            Self::NwSw => 5,
            Self::EastWest => 6,
            Self::NorthSouth => 7,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NwSe => "NW_SE",
            Self::NeSw => "NE_SW",
            Self::NeNw => "NE_NW",
            Self::NeSe => "NE_SE",
            Self::SeSw => "SE_SW",
            Self::NwSw => "NW_SW",
            Self::EastWest => "E_W",
            Self::NorthSouth => "N_S",
        }
    }

    /// Canonical input data file name for this line.
    pub const fn data_file_name(self) -> &'static str {
        match self {
            Self::NwSe => "NW_SE.txt",
            Self::NeSw => "NE_SW.txt",
            Self::NeNw => "NE_NW.txt",
            Self::NeSe => "NE_SE.txt",
            Self::SeSw => "SE_SW.txt",
            Self::NwSw => "NW_SW.txt",
            Self::EastWest => "E_W.txt",
            Self::NorthSouth => "N_S.txt",
        }
    }

    pub const fn class(self) -> LineClass {
        match self {
            Self::NwSe | Self::NeSw => LineClass::Diagonal,
            Self::NeNw | Self::NeSe | Self::SeSw | Self::NwSw => LineClass::Perimeter,
            Self::EastWest | Self::NorthSouth => LineClass::Center,
        }
    }

    pub const fn is_center(self) -> bool {
        matches!(self.class(), LineClass::Center)
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Validated raw readings for all eight lines, indexed by [`LineId`].
///
/// Station 0 of every line is the reflector's starting position and has no
/// reading; a line with N readings therefore spans N+1 worksheet stations.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReadings {
    readings: [Vec<f64>; 8],
}

impl SurveyReadings {
    pub fn new(readings: [Vec<f64>; 8]) -> MoodyResult<Self> {
        for (line, values) in LineId::ALL.iter().zip(readings.iter()) {
            if values.len() < 3 {
                return Err(MoodyError::input_validation(
                    "INPUT.LINE_TOO_SHORT",
                    format!(
                        "line {} has {} readings; need at least 3",
                        line,
                        values.len()
                    ),
                ));
            }
            if values.len() > station_capacity() {
                return Err(MoodyError::input_validation(
                    "INPUT.LINE_CAPACITY",
                    format!(
                        "line {} has {} readings; the compiled capacity is {} stations",
                        line,
                        values.len(),
                        station_capacity()
                    ),
                ));
            }
        }
        Ok(Self { readings })
    }

    pub fn line(&self, line: LineId) -> &[f64] {
        &self.readings[line.index()]
    }

    /// Station count N of a line (equal to its number of readings).
    pub fn station_count(&self, line: LineId) -> usize {
        self.readings[line.index()].len()
    }

    pub fn station_counts(&self) -> [usize; 8] {
        std::array::from_fn(|index| self.readings[index].len())
    }
}
