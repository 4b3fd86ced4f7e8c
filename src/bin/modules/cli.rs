use clap::{ArgAction, Args, Parser, ValueEnum};
use qwell::LengthUnit;
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for calculating bound-state energies of finite square quantum wells.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub well: WellOptions,

    #[command(flatten)]
    pub states: StateOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub solver: SolverOptions,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// The RUST_LOG environment variable takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options describing the well or wells to evaluate.
#[derive(Args)]
#[command(next_help_heading = "Well Options")]
pub struct WellOptions {
    /// Well-set file in TOML format.
    ///
    /// Use '-' to read from standard input. The file lists `[[wells]]` tables with `name`,
    /// `thickness`, `mass_ratio` and `potential` keys. Mutually exclusive with the
    /// single-well options below.
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["thickness", "mass_ratio", "potential"])]
    pub input: Option<String>,

    /// Well thickness, in the unit given by --unit.
    #[arg(short, long, required_unless_present = "input")]
    pub thickness: Option<f64>,

    /// Effective mass as a fraction of the free electron mass.
    #[arg(short, long, required_unless_present = "input")]
    pub mass_ratio: Option<f64>,

    /// Potential depth in eV. Non-positive depths confine nothing.
    #[arg(short = 'U', long, required_unless_present = "input", allow_hyphen_values = true)]
    pub potential: Option<f64>,

    /// Length unit of --thickness (m, nm, A, um).
    #[arg(long, default_value_t = LengthUnit::Nanometer)]
    pub unit: LengthUnit,
}

/// Options selecting which bound levels to compute.
#[derive(Args)]
#[command(next_help_heading = "State Options")]
pub struct StateOptions {
    /// Quantum number of the requested level (1 is the ground state).
    #[arg(short = 'n', long, default_value_t = 1, conflicts_with = "all")]
    pub state: u32,

    /// Compute every bound level of each well.
    #[arg(short, long)]
    pub all: bool,

    /// Also report the infinite-well ground-state energy as a reference.
    #[arg(long)]
    pub reference: bool,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for energies.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Options for controlling the solver behavior.
#[derive(Args)]
#[command(next_help_heading = "Solver Options")]
pub struct SolverOptions {
    /// Convergence tolerance on the eigen-equation residual.
    #[arg(long, default_value_t = 1e-6)]
    pub tolerance: f64,

    /// Maximum number of solver iterations per level.
    #[arg(long, default_value_t = 10_000_000)]
    pub max_iterations: u32,

    /// Maximum number of relaxation-weight halvings per iteration.
    #[arg(long, default_value_t = 128)]
    pub max_halvings: u32,
}

/// Output format for the calculation results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed tables, one per well.
    Pretty,
    /// Comma-separated values with one row per level.
    Csv,
    /// JSON array with one object per well.
    Json,
}
