//! Command-line interface for the percolation-threshold estimator.
//!
//! Offers an `estimate` command that runs independent randomised trials on
//! an N-by-N grid and renders the sample mean, sample standard deviation,
//! and 95% confidence interval of the estimated threshold.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use permea_core::{
    EstimatorBuilder, PercolationError, SmallRngSource, ThresholdEstimate,
};
use thiserror::Error;
use tracing::info;

const DEFAULT_GRID_SIZE: usize = 20;
const DEFAULT_TRIALS: usize = 30;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "permea", about = "Estimate the site-percolation threshold by Monte Carlo simulation.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run independent randomised trials and report threshold statistics.
    Estimate(EstimateCommand),
}

/// Options accepted by the `estimate` command.
#[derive(Debug, Args, Clone)]
pub struct EstimateCommand {
    /// Grid dimension N for the N-by-N site grid.
    #[arg(
        long = "grid-size",
        short = 'n',
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = clap::value_parser!(usize),
    )]
    pub grid_size: usize,

    /// Number of independent trials.
    #[arg(
        long,
        short = 't',
        default_value_t = DEFAULT_TRIALS,
        value_parser = clap::value_parser!(usize),
    )]
    pub trials: usize,

    /// Master seed for the random streams (entropy-derived when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run trials sequentially on a single random stream instead of in
    /// parallel.
    #[arg(long)]
    pub sequential: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core estimation failed.
    #[error(transparent)]
    Core(#[from] PercolationError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct EstimateSummary {
    /// Grid dimension used for every trial.
    pub grid_size: usize,
    /// Number of trials that ran.
    pub trials: usize,
    /// Seed the random streams were derived from.
    pub seed: u64,
    /// Aggregated statistics.
    pub estimate: ThresholdEstimate,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the estimator configuration is invalid.
///
/// # Examples
/// ```
/// use permea_cli::cli::{Cli, Command, EstimateCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Estimate(EstimateCommand {
///         grid_size: 4,
///         trials: 5,
///         seed: Some(13),
///         sequential: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.trials, 5);
/// assert!(summary.estimate.mean() > 0.0);
/// # Ok::<(), permea_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: Cli) -> Result<EstimateSummary, CliError> {
    match cli.command {
        Command::Estimate(cmd) => run_estimate(cmd),
    }
}

fn run_estimate(cmd: EstimateCommand) -> Result<EstimateSummary, CliError> {
    let estimator = EstimatorBuilder::new()
        .with_grid_size(cmd.grid_size)
        .with_trials(cmd.trials)
        .build()?;
    let seed = cmd.seed.unwrap_or_else(rand::random);

    info!(
        grid_size = cmd.grid_size,
        trials = cmd.trials,
        seed,
        sequential = cmd.sequential,
        "starting estimation"
    );

    let estimate = if cmd.sequential {
        let mut source = SmallRngSource::seeded(seed);
        estimator.run(&mut source)?
    } else {
        estimator.run_seeded(seed)?
    };

    Ok(EstimateSummary {
        grid_size: cmd.grid_size,
        trials: cmd.trials,
        seed,
        estimate,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use permea_cli::cli::{Cli, Command, EstimateCommand, render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Estimate(EstimateCommand {
///         grid_size: 3,
///         trials: 4,
///         seed: Some(2),
///         sequential: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("mean"));
/// assert!(text.contains("95% confidence interval"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &EstimateSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "grid size               = {}", summary.grid_size)?;
    writeln!(writer, "trials                  = {}", summary.trials)?;
    writeln!(writer, "seed                    = {}", summary.seed)?;
    writeln!(writer, "mean                    = {}", summary.estimate.mean())?;
    writeln!(writer, "stddev                  = {}", summary.estimate.stddev())?;
    writeln!(
        writer,
        "95% confidence interval = [{}, {}]",
        summary.estimate.confidence_lo(),
        summary.estimate.confidence_hi()
    )?;
    Ok(())
}
