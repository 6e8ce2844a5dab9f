mod commands;

use clap::Parser;
use moody_core::domain::MoodyError;
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let fatal = error.as_moody_error();
            eprintln!("{}", fatal.diagnostic_line());
            eprintln!("{}", fatal.fatal_exit_line());
            fatal.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(name = "moody-rs", about = "Moody surface plate calibration")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Full analysis: checks, worksheets, measurement errors, plot files
    Analyze(commands::AnalyzeArgs),
    /// Print the completed worksheets only
    Worksheets(commands::WorksheetsArgs),
    /// Run input consistency and measurement-error checks only
    Check(commands::CheckArgs),
    /// Write the gnuplot command/data files only
    Plot(commands::PlotArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Analyze(args) => commands::run_analyze_command(args),
        CliCommand::Worksheets(args) => commands::run_worksheets_command(args),
        CliCommand::Check(args) => commands::run_check_command(args),
        CliCommand::Plot(args) => commands::run_plot_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(MoodyError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<MoodyError> for CliError {
    fn from(error: MoodyError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_moody_error(&self) -> MoodyError {
        match self {
            Self::Usage(message) => {
                MoodyError::input_validation("INPUT.CLI_USAGE", message.clone())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => MoodyError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
