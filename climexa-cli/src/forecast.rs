//! `forecast` command: synthetic weather and advice for one planned outing.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use climexa_core::ActivityType;
use climexa_forecast::{SyntheticWeather, predict};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalogue::{emit, find_location, load_locations, random_source, require_existing};
use crate::{
    ARG_ACTIVITY, ARG_DATE, ARG_LOCATION_ID, ARG_LOCATIONS, ARG_OUTPUT, ARG_SEED, CliError,
    ENV_FORECAST_ACTIVITY, ENV_FORECAST_DATE, ENV_FORECAST_LOCATION_ID, ENV_FORECAST_LOCATIONS,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// CLI arguments for the `forecast` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Synthesize a weather reading for one location on a date \
                 and compose activity advice from it. The precipitation \
                 chance is the only random input; pass --seed to fix it.",
    about = "Forecast weather and advice for a planned outing"
)]
#[ortho_config(prefix = "CLIMEXA")]
pub(crate) struct ForecastArgs {
    /// Path to a JSON array of locations.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Id of the location to forecast.
    #[arg(long = ARG_LOCATION_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) location_id: Option<String>,
    /// Activity to plan, e.g. `hiking`.
    #[arg(long = ARG_ACTIVITY, value_name = "activity")]
    #[serde(default)]
    pub(crate) activity: Option<String>,
    /// Day of the outing as `YYYY-MM-DD`.
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Seed for the precipitation draw.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ForecastArgs {
    pub(crate) fn into_config(self) -> Result<ForecastConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ForecastConfig::try_from(merged)
    }
}

/// Resolved `forecast` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForecastConfig {
    pub(crate) locations: Utf8PathBuf,
    pub(crate) location_id: String,
    pub(crate) activity: ActivityType,
    pub(crate) date: NaiveDate,
    pub(crate) seed: Option<u64>,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<ForecastArgs> for ForecastConfig {
    type Error = CliError;

    fn try_from(args: ForecastArgs) -> Result<Self, Self::Error> {
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_FORECAST_LOCATIONS,
        })?;
        let location_id = args.location_id.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION_ID,
            env: ENV_FORECAST_LOCATION_ID,
        })?;
        let activity = args
            .activity
            .ok_or(CliError::MissingArgument {
                field: ARG_ACTIVITY,
                env: ENV_FORECAST_ACTIVITY,
            })?
            .parse::<ActivityType>()?;
        let raw_date = args.date.ok_or(CliError::MissingArgument {
            field: ARG_DATE,
            env: ENV_FORECAST_DATE,
        })?;
        let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT).map_err(|source| {
            CliError::InvalidDate {
                value: raw_date.clone(),
                source,
            }
        })?;
        Ok(Self {
            locations,
            location_id,
            activity,
            date,
            seed: args.seed,
            output: args.output,
        })
    }
}

/// Printed result of the `forecast` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ForecastReport {
    pub(crate) location_id: String,
    pub(crate) activity: ActivityType,
    pub(crate) date: NaiveDate,
    pub(crate) weather: SyntheticWeather,
    pub(crate) advice: Vec<String>,
    pub(crate) advice_text: String,
}

pub(crate) fn run_forecast_with(args: ForecastArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_forecast(&config)?;
    emit(writer, config.output.as_deref(), &report)
}

pub(crate) fn execute_forecast(config: &ForecastConfig) -> Result<ForecastReport, CliError> {
    require_existing(&config.locations, ARG_LOCATIONS)?;
    let locations = load_locations(&config.locations)?;
    let location = find_location(&locations, &config.location_id)?;
    let mut random = random_source(config.seed);
    let prediction = predict(location, config.activity, config.date, &mut *random);
    Ok(ForecastReport {
        location_id: location.id.clone(),
        activity: config.activity,
        date: config.date,
        advice: prediction.advice.fragments().to_vec(),
        advice_text: prediction.advice.to_string(),
        weather: prediction.weather,
    })
}
