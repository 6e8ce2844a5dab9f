use super::CliError;
use anyhow::Context;
use moody_core::domain::PlateConfig;
use moody_core::input::config::{CONFIG_FILE_NAME, read_config_file};
use moody_core::input::readings::read_line_file;
use moody_core::render::plot::write_plot_files;
use moody_core::render::table::render_all_tables;
use moody_core::report::{AnalysisReport, write_json_report};
use moody_core::survey::{LineId, SurveyReadings};
use moody_core::worksheet::checks::{
    measurement_error_report, render_measurement_report, station_count_warnings,
};
use moody_core::worksheet::{SolvedSurvey, solve};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct AnalyzeArgs {
    #[command(flatten)]
    data: DataDirArg,

    /// Directory for the gnuplot artifacts (default: the data directory)
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct WorksheetsArgs {
    #[command(flatten)]
    data: DataDirArg,
}

#[derive(clap::Args)]
pub(super) struct CheckArgs {
    #[command(flatten)]
    data: DataDirArg,
}

#[derive(clap::Args)]
pub(super) struct PlotArgs {
    #[command(flatten)]
    data: DataDirArg,

    /// Directory for the gnuplot artifacts (default: the data directory)
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct DataDirArg {
    /// Directory holding Config.txt and the eight line data files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

/// Read the configuration and all eight line files, echoing what was
/// read the way the original worksheet program does.
fn load_survey(data: &DataDirArg, echo: bool) -> Result<(PlateConfig, SurveyReadings), CliError> {
    let config_path = data.data_dir.join(CONFIG_FILE_NAME);
    let config = read_config_file(&config_path)?;
    tracing::debug!(
        units = %config.units,
        foot_spacing = config.foot_spacing,
        "configuration loaded"
    );
    if echo {
        println!(
            "From file {}: using a {:.2} {} foot spacing.\n",
            CONFIG_FILE_NAME,
            config.foot_spacing,
            config.units.spacing_unit()
        );
    }

    let mut readings: [Vec<f64>; 8] = Default::default();
    for line in LineId::ALL {
        let values = read_line_file(&data.data_dir, line)?;
        tracing::debug!(line = %line, entries = values.len(), "data file loaded");
        if echo {
            println!(
                "Read {} data entries from {}",
                values.len(),
                line.data_file_name()
            );
        }
        readings[line.index()] = values;
    }
    if echo {
        println!();
    }

    let survey = SurveyReadings::new(readings)?;
    Ok((config, survey))
}

fn print_station_warnings(readings: &SurveyReadings) {
    for warning in station_count_warnings(&readings.station_counts()) {
        println!("{}\n", warning);
    }
}

fn solve_survey(config: &PlateConfig, readings: &SurveyReadings) -> SolvedSurvey {
    let survey = solve(readings, config);
    tracing::debug!(max_height = survey.max_height(), "worksheets solved");
    survey
}

pub(super) fn run_analyze_command(args: AnalyzeArgs) -> Result<i32, CliError> {
    let (config, readings) = load_survey(&args.data, true)?;
    print_station_warnings(&readings);

    let survey = solve_survey(&config, &readings);
    println!("{}", render_measurement_report(&measurement_error_report(&survey)));
    print!("{}", render_all_tables(&survey));

    let plot_dir = args.plot_dir.unwrap_or_else(|| args.data.data_dir.clone());
    std::fs::create_dir_all(&plot_dir)
        .with_context(|| format!("creating plot directory {}", plot_dir.display()))?;
    write_plot_files(&survey, &plot_dir)?;
    tracing::debug!(directory = %plot_dir.display(), "plot files written");

    if let Some(report_path) = args.report {
        write_json_report(&AnalysisReport::from_survey(&survey), &report_path)?;
        println!("JSON report: {}", report_path.display());
    }

    Ok(0)
}

pub(super) fn run_worksheets_command(args: WorksheetsArgs) -> Result<i32, CliError> {
    let (config, readings) = load_survey(&args.data, false)?;
    let survey = solve_survey(&config, &readings);
    print!("{}", render_all_tables(&survey));
    Ok(0)
}

pub(super) fn run_check_command(args: CheckArgs) -> Result<i32, CliError> {
    let (config, readings) = load_survey(&args.data, false)?;
    print_station_warnings(&readings);

    let survey = solve_survey(&config, &readings);
    println!("{}", render_measurement_report(&measurement_error_report(&survey)));
    Ok(0)
}

pub(super) fn run_plot_command(args: PlotArgs) -> Result<i32, CliError> {
    let (config, readings) = load_survey(&args.data, false)?;
    let survey = solve_survey(&config, &readings);

    let plot_dir = args.plot_dir.unwrap_or_else(|| args.data.data_dir.clone());
    std::fs::create_dir_all(&plot_dir)
        .with_context(|| format!("creating plot directory {}", plot_dir.display()))?;
    write_plot_files(&survey, &plot_dir)?;
    Ok(0)
}
