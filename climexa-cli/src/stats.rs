//! `stats` command: synthetic monthly climate statistics for one location.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use climexa_forecast::{MonthlyStatistics, monthly_statistics};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalogue::{emit, find_location, load_locations, require_existing};
use crate::{
    ARG_LOCATION_ID, ARG_LOCATIONS, ARG_OUTPUT, CliError, ENV_STATS_LOCATION_ID,
    ENV_STATS_LOCATIONS,
};

/// CLI arguments for the `stats` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print twelve monthly records (temperature band, rainfall \
                 and clear days) for one location, followed by the yearly \
                 summary. The output is fully deterministic.",
    about = "Show monthly climate statistics for a location"
)]
#[ortho_config(prefix = "CLIMEXA")]
pub(crate) struct StatsArgs {
    /// Path to a JSON array of locations.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Id of the location to describe.
    #[arg(long = ARG_LOCATION_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) location_id: Option<String>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl StatsArgs {
    pub(crate) fn into_config(self) -> Result<StatsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StatsConfig::try_from(merged)
    }
}

/// Resolved `stats` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatsConfig {
    pub(crate) locations: Utf8PathBuf,
    pub(crate) location_id: String,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<StatsArgs> for StatsConfig {
    type Error = CliError;

    fn try_from(args: StatsArgs) -> Result<Self, Self::Error> {
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_STATS_LOCATIONS,
        })?;
        let location_id = args.location_id.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION_ID,
            env: ENV_STATS_LOCATION_ID,
        })?;
        Ok(Self {
            locations,
            location_id,
            output: args.output,
        })
    }
}

/// Printed result of the `stats` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StatsReport {
    pub(crate) location_id: String,
    pub(crate) location_name: String,
    #[serde(flatten)]
    pub(crate) statistics: MonthlyStatistics,
}

pub(crate) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_stats(&config)?;
    emit(writer, config.output.as_deref(), &report)
}

pub(crate) fn execute_stats(config: &StatsConfig) -> Result<StatsReport, CliError> {
    require_existing(&config.locations, ARG_LOCATIONS)?;
    let locations = load_locations(&config.locations)?;
    let location = find_location(&locations, &config.location_id)?;
    Ok(StatsReport {
        location_id: location.id.clone(),
        location_name: location.name.clone(),
        statistics: monthly_statistics(location),
    })
}
