use super::is_skippable;
use crate::domain::{MoodyError, ParserResult, PlateConfig, UnitMode};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "Config.txt";

pub fn read_config_file(path: &Path) -> ParserResult<PlateConfig> {
    let source = fs::read_to_string(path).map_err(|source| {
        MoodyError::io_system(
            "IO.CONFIG_OPEN",
            format!(
                "unable to find/open input data file {}: {}",
                path.display(),
                source
            ),
        )
    })?;
    parse_config_source(CONFIG_FILE_NAME, &source)
}

/// Parse the configuration source: the first effective line must read
/// `M <spacing>` or `I <spacing>` (metric mm or imperial inches), with
/// nothing else on the line.
pub fn parse_config_source(file_name: &str, source: &str) -> ParserResult<PlateConfig> {
    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        if is_skippable(raw_line) {
            continue;
        }

        let mut tokens = raw_line.split_whitespace();
        let flag = tokens.next().unwrap_or_default();
        let spacing_token = tokens.next();
        let trailing = tokens.next();

        let units = flag.parse::<UnitMode>().map_err(|parse_error| {
            parse_failure(file_name, line_number, raw_line, &parse_error.to_string())
        })?;

        let Some(spacing_token) = spacing_token else {
            return Err(parse_failure(
                file_name,
                line_number,
                raw_line,
                "missing foot spacing value",
            ));
        };
        if trailing.is_some() {
            return Err(parse_failure(
                file_name,
                line_number,
                raw_line,
                "unexpected trailing text after the foot spacing",
            ));
        }

        let foot_spacing: f64 = spacing_token.parse().map_err(|_| {
            parse_failure(
                file_name,
                line_number,
                raw_line,
                "foot spacing is not a number",
            )
        })?;
        if !foot_spacing.is_finite() || foot_spacing <= 0.0 {
            return Err(MoodyError::input_validation(
                "INPUT.CONFIG_SPACING",
                format!(
                    "line {} of data file {}: foot spacing must be a positive number, got {}",
                    line_number, file_name, spacing_token
                ),
            ));
        }

        return Ok(PlateConfig::new(units, foot_spacing));
    }

    Err(MoodyError::input_validation(
        "INPUT.CONFIG_MISSING",
        format!(
            "Configuration file {} must specify a foot spacing and units.\n\
             Examples:\n\
             M 66.0\n\
             means 66mm foot spacing, and\n\
             I 4.0\n\
             means 4 inch foot spacing.",
            file_name
        ),
    ))
}

fn parse_failure(file_name: &str, line_number: usize, raw_line: &str, detail: &str) -> MoodyError {
    MoodyError::input_validation(
        "INPUT.CONFIG_PARSE",
        format!(
            "unable to parse line {} of data file {}.\n\
             Expected is either \"M x\" or \"I x\",\n\
             where \"x\" is the foot spacing in mm or inches respectively\n\
             ({}).\n\
             Line {} reads:\n{}",
            line_number, file_name, detail, line_number, raw_line
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::{CONFIG_FILE_NAME, parse_config_source, read_config_file};
    use crate::domain::UnitMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn metric_config_parses_with_comments_and_blank_lines() {
        let config = parse_config_source(
            CONFIG_FILE_NAME,
            "# reflector foot spacing\n\n   M 66.0\n",
        )
        .expect("config should parse");

        assert_eq!(config.units, UnitMode::Metric);
        assert_eq!(config.foot_spacing, 66.0);
    }

    #[test]
    fn imperial_config_parses() {
        let config =
            parse_config_source(CONFIG_FILE_NAME, "I 4.0\n").expect("config should parse");
        assert_eq!(config.units, UnitMode::Imperial);
        assert_eq!(config.foot_spacing, 4.0);
    }

    #[test]
    fn bad_unit_flag_names_the_offending_line() {
        let error = parse_config_source(CONFIG_FILE_NAME, "# header\nQ 66.0\n")
            .expect_err("unknown flag should fail");
        assert_eq!(error.placeholder(), "INPUT.CONFIG_PARSE");
        assert!(error.message().contains("line 2"));
        assert!(error.message().contains("Q 66.0"));
    }

    #[test]
    fn trailing_text_and_missing_spacing_are_rejected() {
        assert!(parse_config_source(CONFIG_FILE_NAME, "M 66.0 extra\n").is_err());
        assert!(parse_config_source(CONFIG_FILE_NAME, "M\n").is_err());
    }

    #[test]
    fn nonpositive_spacing_is_rejected() {
        let error = parse_config_source(CONFIG_FILE_NAME, "M -5.0\n")
            .expect_err("negative spacing should fail");
        assert_eq!(error.placeholder(), "INPUT.CONFIG_SPACING");
    }

    #[test]
    fn empty_config_explains_the_expected_format() {
        let error = parse_config_source(CONFIG_FILE_NAME, "# nothing here\n")
            .expect_err("empty config should fail");
        assert_eq!(error.placeholder(), "INPUT.CONFIG_MISSING");
        assert!(error.message().contains("M 66.0"));
        assert!(error.message().contains("I 4.0"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = read_config_file(&temp.path().join("Config.txt"))
            .expect_err("missing file should fail");
        assert_eq!(error.placeholder(), "IO.CONFIG_OPEN");
    }

    #[test]
    fn config_file_round_trips_through_the_filesystem() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("Config.txt");
        fs::write(&path, "M 66.0\n").expect("config should be staged");

        let config = read_config_file(&path).expect("config should parse");
        assert_eq!(config.units, UnitMode::Metric);
    }
}
