//! Command-line arguments and the resolved run configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use beam_core::{BeamInput, BeamSpec, BeamType, LoadSpec, LoadType, DEFAULT_SAMPLE_COUNT};

/// Default plot file, written to the working directory on every run
pub const DEFAULT_PLOT_PATH: &str = "beam_deflection.png";

#[derive(Parser, Debug)]
#[command(
    name = "beamcalc",
    version,
    about = "Beam deflection and bending moment calculator",
    long_about = "Computes peak deflection and peak bending moment for simply supported and \
                  cantilever beams under a point load or a uniformly distributed load, and \
                  saves the deflection curve as a PNG image."
)]
pub struct Cli {
    /// Enable debug logging and print the formulas used
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Where to write the deflection plot
    #[arg(long, global = true, env = "BEAMCALC_OUTPUT", default_value = DEFAULT_PLOT_PATH)]
    pub output: PathBuf,

    /// Number of points sampled along the span for the plot
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_COUNT, value_parser = parse_samples)]
    pub samples: usize,

    /// Skip writing the deflection plot
    #[arg(long, global = true)]
    pub no_plot: bool,

    /// Also print each result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Save the latest result as a JSON report to this path
    #[arg(long, global = true, env = "BEAMCALC_REPORT")]
    pub report: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Prompt for inputs and repeat until declined (default)
    Interactive,
    /// Run a single calculation from arguments
    Solve(SolveArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Beam type: simply-supported | cantilever
    #[arg(long)]
    pub beam: BeamType,

    /// Load type: point-load | uniformly-distributed (or udl)
    #[arg(long)]
    pub load: LoadType,

    /// Span length L (m)
    #[arg(long, allow_negative_numbers = true)]
    pub span: f64,

    /// Modulus of elasticity E (Pa)
    #[arg(long, allow_negative_numbers = true)]
    pub modulus: f64,

    /// Moment of inertia I (m^4)
    #[arg(long, allow_negative_numbers = true)]
    pub inertia: f64,

    /// Point load P (N) or load per unit length w (N/m), per --load
    #[arg(long, allow_negative_numbers = true)]
    pub magnitude: f64,

    /// Label carried into the JSON output
    #[arg(long, default_value = "")]
    pub label: String,
}

impl SolveArgs {
    pub fn to_input(&self) -> BeamInput {
        let load = match self.load {
            LoadType::PointLoad => LoadSpec::point(self.magnitude),
            LoadType::UniformlyDistributed => LoadSpec::uniform(self.magnitude),
        };
        BeamInput {
            label: self.label.clone(),
            beam_type: self.beam,
            load_type: self.load,
            beam: BeamSpec::new(self.span, self.modulus, self.inertia),
            load,
        }
    }
}

/// Settings shared by the interactive and one-shot paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub output: PathBuf,
    pub samples: usize,
    pub plot: bool,
    pub json: bool,
    pub report: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            output: PathBuf::from(DEFAULT_PLOT_PATH),
            samples: DEFAULT_SAMPLE_COUNT,
            plot: true,
            json: false,
            report: None,
            verbose: false,
        }
    }
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            output: self.output.clone(),
            samples: self.samples,
            plot: !self.no_plot,
            json: self.json,
            report: self.report.clone(),
            verbose: self.verbose,
        }
    }
}

fn parse_samples(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a whole number", s))?;
    if n < 2 {
        return Err("at least 2 samples are needed to draw a curve".to_string());
    }
    Ok(n)
}
