//! `recommend` command: rank catalogue locations for an activity and month.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use climexa_core::{ActivityType, Month};
use climexa_scorer::{Recommendation, RecommendationRanker};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::catalogue::{emit, load_locations, random_source, require_existing};
use crate::{
    ARG_ACTIVITY, ARG_LOCATIONS, ARG_MONTH, ARG_OUTPUT, ARG_SEED, CliError, ENV_RECOMMEND_ACTIVITY,
    ENV_RECOMMEND_LOCATIONS, ENV_RECOMMEND_MONTH,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every location in the catalogue for the chosen \
                 activity and month, then print the best four with a \
                 jittered success rate. Pass --seed for reproducible output.",
    about = "Recommend locations for an activity and month"
)]
#[ortho_config(prefix = "CLIMEXA")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of locations.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Activity to plan, e.g. `stargazing`.
    #[arg(long = ARG_ACTIVITY, value_name = "activity")]
    #[serde(default)]
    pub(crate) activity: Option<String>,
    /// Calendar month, 1 for January.
    #[arg(long = ARG_MONTH, value_name = "1-12")]
    #[serde(default)]
    pub(crate) month: Option<u8>,
    /// Seed for the success-rate jitter.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) locations: Utf8PathBuf,
    pub(crate) activity: ActivityType,
    pub(crate) month: Month,
    pub(crate) seed: Option<u64>,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_RECOMMEND_LOCATIONS,
        })?;
        let activity = args
            .activity
            .ok_or(CliError::MissingArgument {
                field: ARG_ACTIVITY,
                env: ENV_RECOMMEND_ACTIVITY,
            })?
            .parse::<ActivityType>()?;
        let month = Month::new(args.month.ok_or(CliError::MissingArgument {
            field: ARG_MONTH,
            env: ENV_RECOMMEND_MONTH,
        })?)?;
        Ok(Self {
            locations,
            activity,
            month,
            seed: args.seed,
            output: args.output,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let ranked = execute_recommend(&config)?;
    emit(writer, config.output.as_deref(), &ranked)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<Vec<Recommendation>, CliError> {
    require_existing(&config.locations, ARG_LOCATIONS)?;
    let locations = load_locations(&config.locations)?;
    let mut random = random_source(config.seed);
    Ok(RecommendationRanker::default().rank(
        config.activity,
        config.month,
        &locations,
        &mut *random,
    ))
}
