use super::is_skippable;
use crate::domain::{MoodyError, ParserResult};
use crate::survey::{LineId, SurveyReadings, station_capacity};
use std::fs;
use std::path::Path;

/// Parse one line's autocollimator readings: exactly one numeric token per
/// effective line, in station order.
pub fn parse_readings_source(file_name: &str, source: &str) -> ParserResult<Vec<f64>> {
    let mut readings = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        if is_skippable(raw_line) {
            continue;
        }

        let mut tokens = raw_line.split_whitespace();
        let token = tokens.next().unwrap_or_default();
        if tokens.next().is_some() {
            return Err(MoodyError::input_validation(
                "INPUT.LINE_PARSE",
                format!(
                    "unable to parse line {} of data file {}.\n\
                     Expected is a single reading in arcseconds per line.\n\
                     Line {} reads:\n{}",
                    line_number, file_name, line_number, raw_line
                ),
            ));
        }

        let reading: f64 = token.parse().map_err(|_| {
            MoodyError::input_validation(
                "INPUT.LINE_PARSE",
                format!(
                    "unable to parse line {} of data file {}.\n\
                     Expected is a single reading in arcseconds per line.\n\
                     Line {} reads:\n{}",
                    line_number, file_name, line_number, raw_line
                ),
            )
        })?;

        if readings.len() >= station_capacity() {
            return Err(MoodyError::input_validation(
                "INPUT.LINE_CAPACITY",
                format!(
                    "data file {} holds more than {} readings.\n\
                     {} is the maximum number of stations this program can handle.",
                    file_name,
                    station_capacity(),
                    station_capacity()
                ),
            ));
        }
        readings.push(reading);
    }

    if readings.len() < 3 {
        return Err(MoodyError::input_validation(
            "INPUT.LINE_TOO_SHORT",
            format!(
                "data file {} holds {} readings; at least 3 are needed\n\
                 to say anything sensible about the surface along that line.",
                file_name,
                readings.len()
            ),
        ));
    }

    Ok(readings)
}

/// Read and parse one line's data file.
pub fn read_line_file(directory: &Path, line: LineId) -> ParserResult<Vec<f64>> {
    let path = directory.join(line.data_file_name());
    let source = fs::read_to_string(&path).map_err(|source| {
        MoodyError::io_system(
            "IO.LINE_OPEN",
            format!(
                "unable to find/open input data file {}: {}",
                path.display(),
                source
            ),
        )
    })?;
    parse_readings_source(line.data_file_name(), &source)
}

/// Read all eight data files from `directory` and assemble the validated
/// survey. Files are read in worksheet order; the first failure aborts.
pub fn read_survey_dir(directory: &Path) -> ParserResult<SurveyReadings> {
    let mut readings: [Vec<f64>; 8] = Default::default();
    for line in LineId::ALL {
        readings[line.index()] = read_line_file(directory, line)?;
    }
    SurveyReadings::new(readings)
}
