use clap::{Args, Parser, Subcommand, ValueEnum};
use protstr::engine::config::DegenerateBondPolicy;
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "protstr - converts absolute protein backbone coordinates into relative, rotation- and translation-invariant per-residue features.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a CA coordinate table into bond-angle and torsion features.
    Convert(ConvertArgs),
}

/// Text formats understood for coordinates in and features out.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileFormat {
    /// Whitespace-delimited columns.
    Table,
    /// Comma-separated values with a header row.
    Csv,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the coordinate file (one `x y z` row per residue), or '-' for stdin.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write features to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Format of the input file. Inferred from the extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub input_format: Option<FileFormat>,

    /// Format of the feature output, overriding the config file.
    #[arg(short = 'f', long, value_enum, value_name = "FORMAT")]
    pub format: Option<FileFormat>,

    /// Fixed number of decimals for angle columns, overriding the config file.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,

    /// What to do with coincident consecutive residues: 'error' or 'zero'.
    #[arg(long, value_name = "POLICY")]
    pub degenerate_bonds: Option<DegenerateBondPolicy>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=4
    #[arg(
        short = 'S',
        long = "set",
        value_name = "KEY=VALUE",
        num_args = 1,
        action = clap::ArgAction::Append
    )]
    pub set_values: Vec<String>,
}
