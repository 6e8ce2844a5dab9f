//! Gnuplot export: a command file plus a data file that together draw the
//! plate surface as a 3-d wireframe of the eight measured lines.

use super::write_text_artifact;
use crate::domain::{MoodyError, MoodyResult, UnitMode};
use crate::survey::LineId;
use crate::worksheet::SolvedSurvey;
use std::fmt::Write;
use std::path::Path;

pub const PLOT_SCRIPT_FILE: &str = "gnuplot.cmd";
pub const PLOT_DATA_FILE: &str = "gnuplot.dat";

/// Plot-space footprint of the plate. The x axis runs west to east and
/// spans the longest east-west station count; y runs south to north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotFootprint {
    pub max_x: usize,
    pub max_y: usize,
}

impl PlotFootprint {
    pub fn from_survey(survey: &SolvedSurvey) -> Self {
        let counts = survey.station_counts();
        let span = |lines: [LineId; 3]| {
            lines
                .iter()
                .map(|line| counts[line.index()])
                .max()
                .unwrap_or(0)
        };
        Self {
            max_x: span([LineId::NeNw, LineId::SeSw, LineId::EastWest]),
            max_y: span([LineId::NeSe, LineId::NwSw, LineId::NorthSouth]),
        }
    }
}

/// One vertex of the wireframe: plot-space position and plate height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

/// Plot-space vertices of one line, in station order. All lines are
/// traversed the way the operator walks them, so most run from their far
/// end back toward the plot origin.
pub fn line_points(survey: &SolvedSurvey, line: LineId, footprint: PlotFootprint) -> Vec<SurfacePoint> {
    let worksheet = survey.worksheet(line);
    let stations = worksheet.stations();
    let max_x = footprint.max_x as f64;
    let max_y = footprint.max_y as f64;

    (0..=stations)
        .map(|j| {
            let forward = j as f64 / stations as f64;
            let backward = (stations - j) as f64 / stations as f64;
            let (x, y) = match line {
                LineId::NwSe => (max_x * forward, max_y * backward),
                LineId::NeSw => (max_x * backward, max_y * backward),
                LineId::NeNw => (max_x * backward, max_y),
                LineId::SeSw => (max_x * backward, 0.0),
                LineId::EastWest => (max_x * backward, 0.5 * max_y),
                LineId::NeSe => (max_x, max_y * backward),
                LineId::NwSw => (0.0, max_y * backward),
                LineId::NorthSouth => (0.5 * max_x, max_y * backward),
            };
            SurfacePoint {
                x,
                y,
                height: worksheet.height()[j],
            }
        })
        .collect()
}

fn z_label(units: UnitMode) -> &'static str {
    match units {
        UnitMode::Metric => "height\\nin\\nmicrons",
        UnitMode::Imperial => "height\\nin\\ntens of\\nmicroinch",
    }
}

/// The gnuplot command file. The z range is padded up to the next whole
/// height unit above the tallest point.
pub fn render_plot_script(survey: &SolvedSurvey) -> String {
    let footprint = PlotFootprint::from_survey(survey);
    let max_z = (1.0 + survey.max_height()) as i64;

    let mut out = String::new();
    out.push_str(
        "# The following command file can be used with gnuplot to produce\n\
         # a 3-dimensional plot of the surface plate. The associated data\n\
         # file is called \"gnuplot.dat\" and can be found in this directory.\n\
         #\n\
         # On typical Unix/Linux/Mac systems, invoke gnuplot with:\n\
         # gnuplot -c gnuplot.cmd\n\
         \n\
         set term X11 enhanced\n\
         set xyplane at 0\n",
    );
    let _ = writeln!(
        out,
        "set label \"N\" at {:.6}, {:.6}, {:.6}",
        0.5 * footprint.max_x as f64,
        1.1 * footprint.max_y as f64,
        0.0
    );
    let _ = writeln!(
        out,
        "set label \"S\" at {:.6}, {:.6}, {:.6}",
        0.5 * footprint.max_x as f64,
        -0.1 * footprint.max_y as f64,
        0.0
    );
    let _ = writeln!(
        out,
        "set label \"E\" at {:.6}, {:.6}, {:.6}",
        1.1 * footprint.max_x as f64,
        0.5 * footprint.max_y as f64,
        0.0
    );
    let _ = writeln!(
        out,
        "set label \"W\" at {:.6}, {:.6}, {:.6}",
        -0.1 * footprint.max_x as f64,
        0.5 * footprint.max_y as f64,
        0.0
    );
    let _ = writeln!(out, "set zrange [0:{}]", max_z);
    let _ = writeln!(out, "set zlabel \"{}\"", z_label(survey.config().units));
    out.push_str("set key off\n");
    let _ = writeln!(
        out,
        "splot [0:{}][0:{}][0:{}] \"gnuplot.dat\" using 1:2:3 with lines",
        footprint.max_x, footprint.max_y, max_z
    );
    out.push_str("pause -1\n");
    out
}

/// Data-file block order: the two diagonals, then the three east-west
/// oriented lines, then the three north-south oriented lines.
const BLOCK_ORDER: [LineId; 8] = [
    LineId::NwSe,
    LineId::NeSw,
    LineId::NeNw,
    LineId::SeSw,
    LineId::EastWest,
    LineId::NeSe,
    LineId::NwSw,
    LineId::NorthSouth,
];

/// The gnuplot data file: one block per line, blocks separated by a pair
/// of blank lines so gnuplot draws them as disconnected curves.
pub fn render_plot_data(survey: &SolvedSurvey) -> String {
    let footprint = PlotFootprint::from_survey(survey);

    let mut out = String::from(
        "# This is a data file for use with gnuplot.\n\
         # The corresponding command file in this directory\n\
         # is called \"gnuplot.cmd\". Together these can be\n\
         # used to generate a 3-d plot of the surface plate height.\n\
         \n\n",
    );

    for line in BLOCK_ORDER {
        let _ = writeln!(out, "# {}", line.data_file_name());
        for point in line_points(survey, line, footprint) {
            let _ = writeln!(out, "{:.6} {:.6} {:.6}", point.x, point.y, point.height);
        }
        out.push_str("\n\n");
    }

    out
}

/// Write both plot files into `directory`.
pub fn write_plot_files(survey: &SolvedSurvey, directory: &Path) -> MoodyResult<()> {
    for (file_name, content) in [
        (PLOT_SCRIPT_FILE, render_plot_script(survey)),
        (PLOT_DATA_FILE, render_plot_data(survey)),
    ] {
        let path = directory.join(file_name);
        write_text_artifact(&path, &content).map_err(|source| {
            MoodyError::io_system(
                "IO.PLOT_WRITE",
                format!(
                    "unable to open/write output file {}: {}",
                    path.display(),
                    source
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        PLOT_DATA_FILE, PLOT_SCRIPT_FILE, PlotFootprint, line_points, render_plot_data,
        render_plot_script, write_plot_files,
    };
    use crate::domain::{PlateConfig, UnitMode};
    use crate::survey::{LineId, SurveyReadings};
    use crate::worksheet::{SolvedSurvey, solve};
    use std::fs;
    use tempfile::TempDir;

    // Diagonals 5 stations, east-west lines 4, north-south lines 3.
    const COUNTS: [usize; 8] = [5, 5, 4, 3, 4, 3, 4, 3];

    fn survey() -> SolvedSurvey {
        let readings =
            SurveyReadings::new(std::array::from_fn(|index| vec![0.5; COUNTS[index]]))
                .expect("readings should validate");
        solve(&readings, &PlateConfig::new(UnitMode::Metric, 66.0))
    }

    #[test]
    fn footprint_spans_the_longest_line_of_each_orientation() {
        let footprint = PlotFootprint::from_survey(&survey());
        assert_eq!(footprint.max_x, 4);
        assert_eq!(footprint.max_y, 3);
    }

    #[test]
    fn diagonals_connect_opposite_plot_corners() {
        let survey = survey();
        let footprint = PlotFootprint::from_survey(&survey);

        let nw_se = line_points(&survey, LineId::NwSe, footprint);
        let first = nw_se.first().expect("diagonal should have points");
        let last = nw_se.last().expect("diagonal should have points");
        assert_eq!((first.x, first.y), (0.0, 3.0));
        assert_eq!((last.x, last.y), (4.0, 0.0));

        let ne_sw = line_points(&survey, LineId::NeSw, footprint);
        let first = ne_sw.first().expect("diagonal should have points");
        let last = ne_sw.last().expect("diagonal should have points");
        assert_eq!((first.x, first.y), (4.0, 3.0));
        assert_eq!((last.x, last.y), (0.0, 0.0));
    }

    #[test]
    fn center_lines_cross_at_the_plate_middle() {
        let survey = survey();
        let footprint = PlotFootprint::from_survey(&survey);

        for point in line_points(&survey, LineId::EastWest, footprint) {
            assert_eq!(point.y, 1.5);
        }
        for point in line_points(&survey, LineId::NorthSouth, footprint) {
            assert_eq!(point.x, 2.0);
        }
    }

    #[test]
    fn data_file_blocks_group_diagonals_then_east_west_then_north_south() {
        let rendered = render_plot_data(&survey());
        let mut last = 0;
        for line in [
            LineId::NwSe,
            LineId::NeSw,
            LineId::NeNw,
            LineId::SeSw,
            LineId::EastWest,
            LineId::NeSe,
            LineId::NwSw,
            LineId::NorthSouth,
        ] {
            let marker = format!("# {}", line.data_file_name());
            let position = rendered.find(&marker).expect("every block should be present");
            assert!(position >= last, "{} out of order", line.data_file_name());
            last = position;
        }
        // The preamble and each of the eight blocks end in double blank
        // lines so gnuplot draws disconnected curves.
        assert_eq!(rendered.matches("\n\n\n").count(), 9);
    }

    #[test]
    fn script_declares_compass_labels_and_the_splot_ranges() {
        let rendered = render_plot_script(&survey());
        assert!(rendered.contains("set label \"N\" at 2.000000, 3.300000, 0.000000"));
        assert!(rendered.contains("set label \"W\" at -0.400000, 1.500000, 0.000000"));
        assert!(rendered.contains("set zlabel \"height\\nin\\nmicrons\""));
        assert!(rendered.contains("splot [0:4][0:3]"));
        assert!(rendered.ends_with("pause -1\n"));
    }

    #[test]
    fn plot_files_land_in_the_requested_directory() {
        let temp = TempDir::new().expect("tempdir should be created");
        write_plot_files(&survey(), temp.path()).expect("plot files should be written");

        let script = fs::read_to_string(temp.path().join(PLOT_SCRIPT_FILE))
            .expect("command file should exist");
        let data =
            fs::read_to_string(temp.path().join(PLOT_DATA_FILE)).expect("data file should exist");
        assert!(script.contains("gnuplot.dat"));
        assert!(data.contains("# NW_SE.txt"));
    }
}
