//! The eight worksheet tables, one per measurement line, printed in the
//! layout of Moody's 1955 paper form. Fixed character widths, no tabs.

use super::format_fixed_f64;
use crate::domain::UnitMode;
use crate::worksheet::{SolvedSurvey, Worksheet};
use std::fmt::Write;

const HEADER_IMPERIAL: &str = "   1       2       3       4       5       6       7       8   \n\
                               ---------------------------------------------------------------\n\
                               Station  Auto-   Angle  Sum of   Cumul   Delta   Delta   Delta \n\
                               \x20Num-    Corr    Displ   Displ   Corr    Datum    Base    Base \n\
                               \x20ber    ArcSec  ArcSec  ArcSec   Factor  ArcSec  ArcSec 10^-5in\n\
                               ---------------------------------------------------------------\n";

const HEADER_IMPERIAL_CENTER: &str = "   1       2       3       4       5       6       6a      7       8   \n\
                                      -----------------------------------------------------------------------\n\
                                      Station  Auto-   Angle  Sum of   Cumul   Delta    Error  Delta   Delta \n\
                                      \x20Num-    Corr    Displ   Displ   Corr    Datum    Shift   Base    Base \n\
                                      \x20ber    ArcSec  ArcSec  ArcSec   Factor  ArcSec    Out   ArcSec 10^-5in\n\
                                      -----------------------------------------------------------------------\n";

const HEADER_METRIC: &str = "   1       2       3       4       5       6       7       8   \n\
                             ---------------------------------------------------------------\n\
                             Station  Auto-   Angle  Sum of   Cumul   Delta   Delta   Delta \n\
                             \x20Num-    Corr    Displ   Displ   Corr    Datum    Base    Base \n\
                             \x20ber    ArcSec  ArcSec  ArcSec   Factor  ArcSec  ArcSec  micron\n\
                             ---------------------------------------------------------------\n";

const HEADER_METRIC_CENTER: &str = "   1       2       3       4       5       6       6a      7       8   \n\
                                    -----------------------------------------------------------------------\n\
                                    Station  Auto-   Angle  Sum of   Cumul   Delta    Error  Delta   Delta \n\
                                    \x20Num-    Corr    Displ   Displ   Corr    Datum    Shift   Base    Base \n\
                                    \x20ber    ArcSec  ArcSec  ArcSec   Factor  ArcSec    Out   ArcSec  micron\n\
                                    -----------------------------------------------------------------------\n";

fn header(units: UnitMode, center: bool) -> &'static str {
    match (units, center) {
        (UnitMode::Metric, false) => HEADER_METRIC,
        (UnitMode::Metric, true) => HEADER_METRIC_CENTER,
        (UnitMode::Imperial, false) => HEADER_IMPERIAL,
        (UnitMode::Imperial, true) => HEADER_IMPERIAL_CENTER,
    }
}

/// Render one line's table, titled by its input data file name.
pub fn render_table(worksheet: &Worksheet, units: UnitMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTABLE {}", worksheet.line().data_file_name());
    out.push_str(header(units, worksheet.line().is_center()));

    // Moody's column 1 labels stations from 1, not from the row index.
    for j in 0..=worksheet.stations() {
        let _ = write!(out, "{:6}", j + 1);
        for column in [
            worksheet.reading(),
            worksheet.displacement(),
            worksheet.cumulative(),
            worksheet.correction(),
            worksheet.datum(),
        ] {
            out.push_str(&format_fixed_f64(column[j], 8, 1));
        }
        if let Some(error_shift) = worksheet.error_shift() {
            out.push_str(&format_fixed_f64(error_shift[j], 8, 1));
        }
        out.push_str(&format_fixed_f64(worksheet.from_base()[j], 8, 1));
        out.push_str(&format_fixed_f64(worksheet.height()[j], 8, 1));
        out.push('\n');
    }

    out
}

/// All eight tables in worksheet order, ready for stdout.
pub fn render_all_tables(survey: &SolvedSurvey) -> String {
    survey
        .worksheets()
        .iter()
        .map(|worksheet| render_table(worksheet, survey.config().units))
        .collect()
}
