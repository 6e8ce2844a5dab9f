//! Self-consistency diagnostics. All findings are warnings; the
//! worksheets and plot are produced regardless, leaving interpretation to
//! the operator.

use super::{SolvedSurvey, middle_value};
use crate::domain::UnitMode;
use crate::survey::LineId;
use serde::Serialize;

/// Maximum measurement error Moody considers acceptable: 100 micro-inch,
/// or its metric equivalent of 2.54 microns.
pub const METRIC_ERROR_LIMIT_MICRONS: f64 = 2.54;
pub const IMPERIAL_ERROR_LIMIT: f64 = 10.0;

/// Station-count checks over the raw input, run before any computation.
/// Returns human-readable warnings; an empty vector means the geometry is
/// consistent.
pub fn station_count_warnings(counts: &[usize; 8]) -> Vec<String> {
    let mut warnings = Vec::new();

    if counts[LineId::NwSe.index()] != counts[LineId::NeSw.index()] {
        warnings.push(format!(
            "Warning: the number of stations along the {} and {} diagonals\n\
             are expected to be the same, but are not.",
            LineId::NwSe.data_file_name(),
            LineId::NeSw.data_file_name(),
        ));
    }

    // The three east-west oriented lines must agree, and likewise the
    // three north-south oriented lines.
    for group in [
        [LineId::NeNw, LineId::SeSw, LineId::EastWest],
        [LineId::NeSe, LineId::NwSw, LineId::NorthSouth],
    ] {
        let group_counts: Vec<usize> = group.iter().map(|line| counts[line.index()]).collect();
        if group_counts.windows(2).any(|pair| pair[0] != pair[1]) {
            warnings.push(format!(
                "Warning: the number of stations along the three lines\n\
                 {}, {} and {} are expected to be the same, but are not.",
                group[0].data_file_name(),
                group[1].data_file_name(),
                group[2].data_file_name(),
            ));
        }
    }

    // Pythagoras: each diagonal spans a right triangle whose legs are one
    // east-west and one north-south perimeter line.
    for (x_line, y_line, z_line) in [
        (LineId::NeNw, LineId::NeSe, LineId::NwSe),
        (LineId::SeSw, LineId::NwSw, LineId::NeSw),
    ] {
        let x = counts[x_line.index()];
        let y = counts[y_line.index()];
        let z = counts[z_line.index()];
        let diagonal_length = ((x * x + y * y) as f64).sqrt();

        if (diagonal_length - z as f64).abs() > 1.5 {
            warnings.push(format!(
                "Warning: the number of stations along the perimeter lines\n\
                 and diagonal lines appears to deviate significantly from\n\
                 Pythagoras' Theorem x^2 + y^2 = z^2 for\n\
                 x = {}, y = {} and z = {}",
                x, y, z
            ));
        }
    }

    warnings
}

/// Measurement-quality estimate for one center line: the computed height
/// at the line's middle, which would be zero absent measurement errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CenterLineError {
    pub line: LineId,
    /// Height at the line middle in the configured output unit
    /// (microns, or hundred-thousandths of an inch).
    pub error: f64,
    pub acceptable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementErrorReport {
    pub units: UnitMode,
    pub checks: Vec<CenterLineError>,
    pub acceptable: bool,
}

/// Estimate measurement errors from the two solved center lines.
///
/// The error is the middle value of column 6 (not 6a, whose middle is
/// zero by construction): the height the correction factors assign to the
/// plate center relative to the perimeter-seeded datum.
pub fn measurement_error_report(survey: &SolvedSurvey) -> MeasurementErrorReport {
    let units = survey.config().units;
    let scale = survey.config().height_scale();
    let limit = match units {
        UnitMode::Metric => METRIC_ERROR_LIMIT_MICRONS,
        UnitMode::Imperial => IMPERIAL_ERROR_LIMIT,
    };

    let checks: Vec<CenterLineError> = LineId::CENTER
        .iter()
        .map(|line| {
            let error = middle_value(survey.worksheet(*line).datum()) * scale;
            CenterLineError {
                line: *line,
                error,
                acceptable: error.abs() <= limit,
            }
        })
        .collect();

    let acceptable = checks.iter().all(|check| check.acceptable);
    MeasurementErrorReport {
        units,
        checks,
        acceptable,
    }
}

/// Operator-facing rendering of the measurement-error block, matching the
/// original worksheet program's wording.
pub fn render_measurement_report(report: &MeasurementErrorReport) -> String {
    let mut lines = Vec::with_capacity(report.checks.len() + 6);

    lines.push("================================================================".to_string());
    lines.push(
        "Measurement errors are estimated from the computed\n\
         heights at the middle of the two center lines. Absent any\n\
         measurement errors, these computed heights would be zero."
            .to_string(),
    );

    for check in &report.checks {
        match report.units {
            UnitMode::Metric => lines.push(format!(
                "Computed height at the center of the {} line: {:4.2} microns.",
                check.line.data_file_name(),
                check.error
            )),
            UnitMode::Imperial => lines.push(format!(
                "Computed height at the center of the {} line: {:4.2} micro-inches.",
                check.line.data_file_name(),
                10.0 * check.error
            )),
        }
    }

    if report.acceptable {
        lines.push(
            "According to Moody these errors are acceptable, because their\n\
             magnitude is less than 100 micro-inch = 2.54 microns."
                .to_string(),
        );
    } else {
        lines.push(
            "Warning: measurement errors are larger than Moody considers\n\
             acceptable (100 micro-inch = 2.54 microns). The job must be done over!"
                .to_string(),
        );
    }
    lines.push("================================================================".to_string());

    lines.join("\n")
}
