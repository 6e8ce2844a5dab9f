//! Moody's worksheet pipeline: one table of columns per measurement line,
//! populated column-by-column in the fixed order of the method.

pub mod checks;

mod columns;
mod diagonal;
mod normalize;
mod propagate;
mod shifter;

use crate::domain::PlateConfig;
use crate::survey::{LineClass, LineId, SurveyReadings};

/// Per-line worksheet. Columns are dense, station-aligned sequences of
/// length N+1 (stations 0..=N, N = number of raw readings); station 0 is
/// the reflector's starting position and carries a zero reading.
///
/// Column numbering follows Moody's paper form: 2 reading, 3 angular
/// displacement, 4 cumulative displacement, 5 cumulative correction
/// factor, 6 displacement from datum plane, 6a error shift-out (center
/// lines only), 7 displacement from base plane, 8 height in physical
/// units. Column 1 (the station label) is derived at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    line: LineId,
    stations: usize,
    reading: Vec<f64>,
    displacement: Vec<f64>,
    cumulative: Vec<f64>,
    correction: Vec<f64>,
    datum: Vec<f64>,
    error_shift: Vec<f64>,
    from_base: Vec<f64>,
    height: Vec<f64>,
}

impl Worksheet {
    fn new(line: LineId, raw_readings: &[f64]) -> Self {
        let stations = raw_readings.len();
        let rows = stations + 1;
        let mut reading = vec![0.0; rows];
        reading[1..].copy_from_slice(raw_readings);

        Self {
            line,
            stations,
            reading,
            displacement: vec![0.0; rows],
            cumulative: vec![0.0; rows],
            correction: vec![0.0; rows],
            datum: vec![0.0; rows],
            error_shift: vec![0.0; rows],
            from_base: vec![0.0; rows],
            height: vec![0.0; rows],
        }
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    /// Station count N; the worksheet has N+1 rows.
    pub fn stations(&self) -> usize {
        self.stations
    }

    pub fn rows(&self) -> usize {
        self.stations + 1
    }

    pub fn reading(&self) -> &[f64] {
        &self.reading
    }

    pub fn displacement(&self) -> &[f64] {
        &self.displacement
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn correction(&self) -> &[f64] {
        &self.correction
    }

    pub fn datum(&self) -> &[f64] {
        &self.datum
    }

    /// Column 6a; present only on the two center lines.
    pub fn error_shift(&self) -> Option<&[f64]> {
        self.line
            .is_center()
            .then_some(self.error_shift.as_slice())
    }

    pub fn from_base(&self) -> &[f64] {
        &self.from_base
    }

    pub fn height(&self) -> &[f64] {
        &self.height
    }

    /// Column feeding the global base-plane scan: 6a for center lines,
    /// 6 for everything else.
    fn base_source(&self) -> &[f64] {
        match self.line.class() {
            LineClass::Center => &self.error_shift,
            LineClass::Diagonal | LineClass::Perimeter => &self.datum,
        }
    }
}

/// The "middle value" of a station-aligned column holding N+1 entries:
/// the exact middle entry when the row count is odd (N even), otherwise
/// the mean of the two entries flanking the center. A fixed positional
/// rule, not a sorted median; columns are ordered by station traversal.
pub fn middle_value(column: &[f64]) -> f64 {
    let stations = column.len() - 1;
    if stations % 2 == 0 {
        column[stations / 2]
    } else {
        0.5 * (column[(stations - 1) / 2] + column[(stations + 1) / 2])
    }
}

/// All eight solved worksheets plus the global datum extremes.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedSurvey {
    worksheets: [Worksheet; 8],
    config: PlateConfig,
    lowest: f64,
    highest: f64,
}

impl SolvedSurvey {
    pub fn worksheet(&self, line: LineId) -> &Worksheet {
        &self.worksheets[line.index()]
    }

    pub fn worksheets(&self) -> &[Worksheet; 8] {
        &self.worksheets
    }

    pub fn config(&self) -> &PlateConfig {
        &self.config
    }

    /// Global minimum of the corrected heights, in arcseconds.
    pub fn lowest(&self) -> f64 {
        self.lowest
    }

    /// Global maximum of the corrected heights, in arcseconds.
    pub fn highest(&self) -> f64 {
        self.highest
    }

    /// Maximum plate height above the base plane, in the configured
    /// physical unit.
    pub fn max_height(&self) -> f64 {
        (self.highest - self.lowest) * self.config.height_scale()
    }

    pub fn station_counts(&self) -> [usize; 8] {
        std::array::from_fn(|index| self.worksheets[index].stations)
    }
}

/// Run the complete pipeline over validated readings. Infallible: the
/// input readers guarantee 3 <= N <= capacity for every line, and every
/// later stage is pure arithmetic.
pub fn solve(readings: &SurveyReadings, config: &PlateConfig) -> SolvedSurvey {
    let mut worksheets: [Worksheet; 8] =
        std::array::from_fn(|index| Worksheet::new(LineId::ALL[index], readings.line(LineId::ALL[index])));

    for worksheet in &mut worksheets {
        columns::build_first_four(worksheet);
    }

    propagate::solve_lines(&mut worksheets);

    let (lowest, highest) = normalize::rebase_and_convert(&mut worksheets, config);

    SolvedSurvey {
        worksheets,
        config: *config,
        lowest,
        highest,
    }
}
