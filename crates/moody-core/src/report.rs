//! Machine-readable summary of a solved survey, serialized as JSON for
//! downstream tooling.

use crate::domain::{MoodyError, MoodyResult, PlateConfig};
use crate::survey::LineId;
use crate::worksheet::checks::{MeasurementErrorReport, measurement_error_report};
use crate::worksheet::{SolvedSurvey, Worksheet};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    pub line: LineId,
    pub data_file: &'static str,
    pub stations: usize,
    /// Column 8 for every station, lowest point of the plate at zero.
    pub heights: Vec<f64>,
}

impl LineSummary {
    fn from_worksheet(worksheet: &Worksheet) -> Self {
        Self {
            line: worksheet.line(),
            data_file: worksheet.line().data_file_name(),
            stations: worksheet.stations(),
            heights: worksheet.height().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub config: PlateConfig,
    /// Height unit of every height in this report.
    pub height_unit: &'static str,
    /// Global extremes of the corrected heights, in arcseconds.
    pub lowest: f64,
    pub highest: f64,
    pub max_height: f64,
    pub lines: Vec<LineSummary>,
    pub station_count_warnings: Vec<String>,
    pub measurement_errors: MeasurementErrorReport,
}

impl AnalysisReport {
    pub fn from_survey(survey: &SolvedSurvey) -> Self {
        Self {
            config: *survey.config(),
            height_unit: survey.config().units.height_unit(),
            lowest: survey.lowest(),
            highest: survey.highest(),
            max_height: survey.max_height(),
            lines: survey
                .worksheets()
                .iter()
                .map(LineSummary::from_worksheet)
                .collect(),
            station_count_warnings: crate::worksheet::checks::station_count_warnings(
                &survey.station_counts(),
            ),
            measurement_errors: measurement_error_report(survey),
        }
    }
}

/// Serialize the report and write it to `path` as pretty-printed JSON.
pub fn write_json_report(report: &AnalysisReport, path: &Path) -> MoodyResult<()> {
    let encoded = serde_json::to_string_pretty(report).map_err(|source| {
        MoodyError::internal(
            "REPORT.ENCODE",
            format!("unable to encode the analysis report: {}", source),
        )
    })?;
    crate::render::write_text_artifact(path, &encoded).map_err(|source| {
        MoodyError::io_system(
            "IO.REPORT_WRITE",
            format!(
                "unable to open/write output file {}: {}",
                path.display(),
                source
            ),
        )
    })
}
