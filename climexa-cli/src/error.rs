//! Error types emitted by the Climexa CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use climexa_core::{MonthError, ParseActivityError};
use thiserror::Error;

/// Errors emitted by the Climexa CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the location catalogue failed.
    #[error("failed to open locations at {path:?}: {source}")]
    OpenLocations {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The location catalogue is not a JSON array of locations.
    #[error("failed to parse locations JSON at {path:?}: {source}")]
    ParseLocations {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// No location in the catalogue has the requested id.
    #[error("no location with id {id:?} in the catalogue")]
    UnknownLocation {
        /// Requested id.
        id: String,
    },
    /// The activity name is not recognised.
    #[error(transparent)]
    InvalidActivity(#[from] ParseActivityError),
    /// The month number is outside 1-12.
    #[error(transparent)]
    InvalidMonth(#[from] MonthError),
    /// The date is not formatted as `YYYY-MM-DD`.
    #[error("invalid date {value:?}, expected YYYY-MM-DD: {source}")]
    InvalidDate {
        /// Raw value.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the output file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutputFile {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
