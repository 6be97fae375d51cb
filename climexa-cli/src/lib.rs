//! Command-line interface for the Climexa recommendation engine.
//!
//! Every subcommand reads a JSON array of locations and prints a
//! pretty-printed JSON report. Options layer through `ortho_config`, so each
//! flag can also come from a configuration file or a `CLIMEXA_CMDS_*`
//! environment variable.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod catalogue;
mod error;
mod forecast;
mod recommend;
mod stats;

pub use error::CliError;

use forecast::{ForecastArgs, run_forecast_with};
use recommend::{RecommendArgs, run_recommend_with};
use stats::{StatsArgs, run_stats_with};

pub(crate) const ARG_LOCATIONS: &str = "locations";
pub(crate) const ARG_LOCATION_ID: &str = "location-id";
pub(crate) const ARG_ACTIVITY: &str = "activity";
pub(crate) const ARG_MONTH: &str = "month";
pub(crate) const ARG_DATE: &str = "date";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_OUTPUT: &str = "output";

pub(crate) const ENV_RECOMMEND_LOCATIONS: &str = "CLIMEXA_CMDS_RECOMMEND_LOCATIONS";
pub(crate) const ENV_RECOMMEND_ACTIVITY: &str = "CLIMEXA_CMDS_RECOMMEND_ACTIVITY";
pub(crate) const ENV_RECOMMEND_MONTH: &str = "CLIMEXA_CMDS_RECOMMEND_MONTH";
pub(crate) const ENV_FORECAST_LOCATIONS: &str = "CLIMEXA_CMDS_FORECAST_LOCATIONS";
pub(crate) const ENV_FORECAST_LOCATION_ID: &str = "CLIMEXA_CMDS_FORECAST_LOCATION_ID";
pub(crate) const ENV_FORECAST_ACTIVITY: &str = "CLIMEXA_CMDS_FORECAST_ACTIVITY";
pub(crate) const ENV_FORECAST_DATE: &str = "CLIMEXA_CMDS_FORECAST_DATE";
pub(crate) const ENV_STATS_LOCATIONS: &str = "CLIMEXA_CMDS_STATS_LOCATIONS";
pub(crate) const ENV_STATS_LOCATION_ID: &str = "CLIMEXA_CMDS_STATS_LOCATION_ID";

/// Run the Climexa CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Forecast(args) => run_forecast_with(args, writer),
        Command::Stats(args) => run_stats_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "climexa",
    about = "Weather-aware activity recommendations for outdoor locations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank locations for an activity and month.
    Recommend(RecommendArgs),
    /// Synthesize weather and advice for an outing.
    Forecast(ForecastArgs),
    /// Show monthly climate statistics for a location.
    Stats(StatsArgs),
}

#[cfg(test)]
mod tests;
