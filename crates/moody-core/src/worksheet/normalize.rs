use super::Worksheet;
use crate::domain::PlateConfig;

/// Columns 7 and 8: re-base every line to the single lowest corrected
/// height on the plate, then convert arcseconds to the physical height
/// unit. Returns the global (lowest, highest) in arcseconds.
///
/// Center lines contribute their error-shift column (6a) to the scan and
/// to the re-based heights; every other line contributes column 6.
pub(super) fn rebase_and_convert(
    worksheets: &mut [Worksheet; 8],
    config: &PlateConfig,
) -> (f64, f64) {
    let mut lowest = worksheets[0].datum[0];
    let mut highest = worksheets[0].datum[0];

    for worksheet in worksheets.iter() {
        for value in worksheet.base_source() {
            lowest = lowest.min(*value);
            highest = highest.max(*value);
        }
    }

    let scale = config.height_scale();
    for worksheet in worksheets.iter_mut() {
        for j in 0..=worksheet.stations {
            let corrected = worksheet.base_source()[j];
            worksheet.from_base[j] = corrected - lowest;
            worksheet.height[j] = worksheet.from_base[j] * scale;
        }
    }

    (lowest, highest)
}

#[cfg(test)]
mod tests {
    use crate::domain::{PlateConfig, UnitMode};
    use crate::survey::{LineId, SurveyReadings};
    use crate::worksheet::solve;

    fn uniform_survey(readings: &[f64]) -> SurveyReadings {
        SurveyReadings::new(std::array::from_fn(|_| readings.to_vec()))
            .expect("readings should validate")
    }

    #[test]
    fn every_line_is_rebased_to_a_zero_global_minimum() {
        let config = PlateConfig::new(UnitMode::Metric, 66.0);
        let survey = solve(&uniform_survey(&[0.0, 3.0, -2.0, 5.0]), &config);

        let global_min = survey
            .worksheets()
            .iter()
            .flat_map(|worksheet| worksheet.from_base().iter())
            .fold(f64::INFINITY, |minimum, value| minimum.min(*value));
        assert!(global_min.abs() < 1e-12);
        assert!(survey.lowest() <= survey.highest());
    }

    #[test]
    fn heights_scale_with_the_configured_foot_spacing() {
        let metric = PlateConfig::new(UnitMode::Metric, 66.0);
        let survey = solve(&uniform_survey(&[0.0, 2.0, 1.0, 4.0]), &metric);

        let worksheet = survey.worksheet(LineId::NwSe);
        let scale = metric.height_scale();
        for j in 0..=worksheet.stations() {
            assert!((worksheet.height()[j] - worksheet.from_base()[j] * scale).abs() < 1e-9);
        }
        assert!(
            (survey.max_height() - (survey.highest() - survey.lowest()) * scale).abs() < 1e-12
        );
    }
}
