use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Kyle Barlow",
    version,
    about = "helixwatch - Watch a directory for new PDB structures, run DSSP on each one and rank them by helix length and helical content.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the DSSP executable (e.g., '~/bin/mkdssp').
    #[arg(long = "dssp", global = true, value_name = "PATH")]
    pub dssp_binary: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S polling.interval-ms=500
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the helix statistics of every new structure file until interrupted.
    Monitor(MonitorArgs),
    /// Run a timed contest and announce the files with the longest helix and the highest helical content.
    Contest(ContestArgs),
    /// Analyze a single structure file once and print its helix statistics.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `monitor` subcommand.
#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Directory to watch for structure files.
    #[arg(required = true, value_name = "DIR")]
    pub input_dir: PathBuf,
}

/// Arguments for the `contest` subcommand.
#[derive(Args, Debug)]
pub struct ContestArgs {
    /// Directory to watch for contest entries.
    #[arg(required = true, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Contest end time in local time, e.g. "2024-05-01 03:30pm".
    /// Defaults to a short contest starting now.
    #[arg(short, long, value_name = "\"YYYY-MM-DD HH:MMam/pm\"")]
    pub end_time: Option<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Structure file to analyze.
    #[arg(required = true, value_name = "PATH")]
    pub path: PathBuf,

    /// Treat PATH as saved DSSP output instead of running DSSP on it.
    #[arg(long)]
    pub dssp_output: bool,
}
